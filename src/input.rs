//! Key bindings for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use deeproot::core::skills::SkillId;
use deeproot::core::upgrades::{SoulUpgradeKind, UpgradeKind};
use deeproot::Action;

/// What a key press asks the main loop to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputResult {
    Action(Action),
    Quit,
    Ignored,
}

/// Bindings shown in the footer, in display order.
pub const KEY_HELP: [(&str, &str); 8] = [
    ("B", "Breathe"),
    ("M", "Meditate"),
    ("1-4", "Upgrades"),
    ("A/G", "Soul"),
    ("R", "Radiance"),
    ("S", "Summon"),
    ("Q", "Quit"),
    ("Esc", "Quit"),
];

pub fn handle_key(key: KeyEvent) -> InputResult {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Ignored;
    }
    map_key(key.code)
}

pub fn map_key(code: KeyCode) -> InputResult {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char(' ') => Action::DeepBreath,
        KeyCode::Char('m') | KeyCode::Char('M') => Action::Meditate,
        KeyCode::Char('1') => Action::BuyUpgrade(UpgradeKind::AutoGrow),
        KeyCode::Char('2') => Action::BuyUpgrade(UpgradeKind::Efficiency),
        KeyCode::Char('3') => Action::BuyUpgrade(UpgradeKind::ManaConductivity),
        KeyCode::Char('4') => Action::BuyUpgrade(UpgradeKind::Meditation),
        KeyCode::Char('a') | KeyCode::Char('A') => Action::BuySoulUpgrade(SoulUpgradeKind::Attack),
        KeyCode::Char('g') | KeyCode::Char('G') => Action::BuySoulUpgrade(SoulUpgradeKind::Growth),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::ActivateSkill(SkillId::PurifyingRadiance),
        KeyCode::Char('s') | KeyCode::Char('S') => Action::SpawnEnemy,
        _ => return InputResult::Ignored,
    };
    InputResult::Action(action)
}

/// Key label for an upgrade row.
pub fn upgrade_key(kind: UpgradeKind) -> char {
    match kind {
        UpgradeKind::AutoGrow => '1',
        UpgradeKind::Efficiency => '2',
        UpgradeKind::ManaConductivity => '3',
        UpgradeKind::Meditation => '4',
    }
}

pub fn soul_upgrade_key(kind: SoulUpgradeKind) -> char {
    match kind {
        SoulUpgradeKind::Attack => 'A',
        SoulUpgradeKind::Growth => 'G',
    }
}
