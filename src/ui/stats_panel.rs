use crate::input::{soul_upgrade_key, upgrade_key};
use deeproot::core::skills::SkillId;
use deeproot::core::upgrades::{SoulUpgradeKind, UpgradeKind};
use deeproot::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws resources, focus and everything the player can buy.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Resources
            Constraint::Length(3), // Focus
            Constraint::Length(4), // Actions
            Constraint::Length(6), // Upgrades
            Constraint::Min(4),    // Soul upgrades
        ])
        .split(area);

    draw_resources(frame, chunks[0], state);
    draw_focus(frame, chunks[1], state);
    draw_actions(frame, chunks[2], state);
    draw_upgrades(frame, chunks[3], state);
    draw_soul_upgrades(frame, chunks[4], state);
}

fn draw_resources(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Life Force: {:.0}", state.life_force),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (+{:.1}/s)", state.life_force_per_second()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("Lifetime:   {:.0}", state.total_life_force),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("Mana:       {:.1}", state.mana),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                format!("  (+{:.2}/s)", state.mana_per_second()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("Souls:      {}", state.soul_fragments),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            format!("Attack:     {:.1}/s", state.attack_power()),
            Style::default().fg(Color::Red),
        )),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Resources"));
    frame.render_widget(paragraph, area);
}

fn draw_focus(frame: &mut Frame, area: Rect, state: &GameState) {
    let ratio = if state.max_focus > 0.0 {
        (state.focus / state.max_focus).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let label = format!(
        "{:.0}/{:.0} (+{:.1}/s)",
        state.focus,
        state.max_focus,
        state.focus_regen_per_second()
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Focus"))
        .gauge_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .label(label)
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_actions(frame: &mut Frame, area: Rect, state: &GameState) {
    let radiance = SkillId::PurifyingRadiance;
    let skill = state.skills.get(radiance);
    let radiance_label = if skill.active {
        format!("{} ({:.1}s left)", radiance.name(), skill.timer)
    } else {
        format!("{} ({:.0} mana)", radiance.name(), skill.mana_cost)
    };

    let lines = vec![
        action_line(
            'B',
            format!("Deep Breath (+{:.1} LF)", state.deep_breath_gain()),
            state.can_deep_breath(),
        ),
        Line::from(vec![
            key_span('M', state.can_meditate()),
            Span::styled(
                format!(
                    "Meditate ({:.0} LF, +{:.0} focus)",
                    state.balance.meditate_cost,
                    state.meditate_restore()
                ),
                enabled_style(state.can_meditate()),
            ),
            Span::raw("   "),
            key_span('R', state.can_activate_skill(radiance)),
            Span::styled(radiance_label, enabled_style(state.can_activate_skill(radiance))),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Actions"));
    frame.render_widget(paragraph, area);
}

fn draw_upgrades(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines: Vec<Line> = UpgradeKind::all()
        .iter()
        .map(|kind| {
            action_line(
                upgrade_key(*kind),
                format!(
                    "{:<18} Lv.{:<3} {:>10.0} LF",
                    kind.name(),
                    state.upgrade_level(*kind),
                    state.upgrade_cost(*kind)
                ),
                state.can_buy_upgrade(*kind),
            )
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Upgrades"));
    frame.render_widget(paragraph, area);
}

fn draw_soul_upgrades(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines: Vec<Line> = SoulUpgradeKind::all()
        .iter()
        .map(|kind| {
            action_line(
                soul_upgrade_key(*kind),
                format!(
                    "{:<18} x{:<4.1} {:>6} souls",
                    kind.name(),
                    state.multipliers.get(*kind),
                    state.soul_upgrade_cost(*kind)
                ),
                state.can_buy_soul_upgrade(*kind),
            )
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Soul"));
    frame.render_widget(paragraph, area);
}

fn action_line(key: char, text: String, enabled: bool) -> Line<'static> {
    Line::from(vec![
        key_span(key, enabled),
        Span::styled(text, enabled_style(enabled)),
    ])
}

fn key_span(key: char, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("[{}] ", key), style)
}

// Unaffordable entries are dimmed, like a disabled button.
fn enabled_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
