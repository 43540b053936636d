use deeproot::core::constants::BATTLE_UNLOCK_THRESHOLD;
use deeproot::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the current enemy, or a hint for how to find one.
pub fn draw_battle_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title("Battle");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(inner);

    if let Some(enemy) = &state.enemy {
        let label = format!("{:.0}/{:.0} HP", enemy.hp.max(0.0), enemy.max_hp);
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} Lv.{}", enemy.name, enemy.level)),
            )
            .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .label(label)
            .ratio(enemy.hp_fraction());
        frame.render_widget(gauge, chunks[0]);
    } else {
        let text = if state.battle_unlocked {
            "No hostile signatures. Press [S] to summon."
        } else {
            "No hostile signatures."
        };
        let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[0]);
    }

    let status = if state.battle_unlocked {
        Line::from(vec![
            Span::styled(
                format!("Purified: {}", state.enemies_defeated),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{:.1} dmg/s", state.attack_power()),
                Style::default().fg(Color::Red),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!(
                "The abyss stirs at {:.0} lifetime life force.",
                BATTLE_UNLOCK_THRESHOLD
            ),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[1],
    );
}
