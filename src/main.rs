mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use deeproot::core::constants::INPUT_POLL_MS;
use deeproot::{
    advance_time, apply_action, build_info, Edition, GameState, TICK_DELTA_SECONDS,
    TICK_INTERVAL_MS,
};
use input::{handle_key, InputResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::draw_ui;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut edition = Edition::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--edition" | "-e" => {
                let Some(name) = args.get(i + 1) else {
                    eprintln!("--edition needs a value: seedling, verdant or abyssal");
                    std::process::exit(1);
                };
                match Edition::from_name(name) {
                    Some(found) => edition = found,
                    None => {
                        eprintln!("Unknown edition: {}", name);
                        eprintln!("Known editions: seedling, verdant, abyssal");
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'deeproot --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut state = GameState::new(edition.balance());
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();
    let result: io::Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| draw_ui(frame, &state)) {
            break Err(e);
        }

        match event::poll(Duration::from_millis(INPUT_POLL_MS)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => match handle_key(key) {
                    InputResult::Quit => break Ok(()),
                    InputResult::Action(action) => {
                        apply_action(&mut state, action, &mut rng);
                    }
                    InputResult::Ignored => {}
                },
                Ok(_) => {}
                Err(e) => break Err(e),
            },
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            advance_time(&mut state, TICK_DELTA_SECONDS);
            last_tick = Instant::now();
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn print_help() {
    println!("Deep Root - Terminal Idle Game\n");
    println!("Usage: deeproot [options]\n");
    println!("Options:");
    println!("  -e, --edition <E>  seedling, verdant or abyssal (default: abyssal)");
    println!("  -v, --version      Show version information");
    println!("  -h, --help         Show this help message\n");
    println!("Keys:");
    println!("  b  Deep breath       m  Meditate");
    println!("  1  Root Expansion    2  Photosynthesis");
    println!("  3  Mana Conductivity 4  Stillness");
    println!("  a  Abyssal Sharpness g  Eternal Growth");
    println!("  r  Purifying Radiance");
    println!("  s  Summon an enemy");
    println!("  q  Quit");
}
