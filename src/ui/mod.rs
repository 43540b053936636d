mod battle_panel;
mod log_panel;
mod stats_panel;

use crate::input::KEY_HELP;
use deeproot::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws one frame from a snapshot of the store.
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Key help
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    stats_panel::draw_stats_panel(frame, body[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(body[1]);

    battle_panel::draw_battle_panel(frame, right[0], state);
    log_panel::draw_log_panel(frame, right[1], state);

    draw_footer(frame, chunks[2]);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let line = Line::from(vec![
        Span::styled(
            "DEEP ROOT",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Edition: {}", state.balance.edition.name()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Time: {:.0}s", state.elapsed_seconds),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, label)) in KEY_HELP.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", label)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Controls"))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
