use deeproot::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the narrative log, newest entry on top.
pub fn draw_log_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = state
        .log
        .iter()
        .take(visible)
        .enumerate()
        .map(|(i, entry)| {
            let color = if i == 0 { Color::White } else { Color::Gray };
            Line::styled(entry.as_str(), Style::default().fg(color))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Chronicle"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
