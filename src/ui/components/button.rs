//! Button component for TUI

use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool) {
    let border_style = if is_selected {
        theme::focused()
    } else {
        theme::muted()
    };

    let text_style = if is_selected {
        theme::highlight()
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a row of buttons side by side, sized to their labels
pub fn render_button_row(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    selected: Option<usize>,
) {
    let constraints: Vec<Constraint> = labels
        .iter()
        .map(|label| Constraint::Length(label.chars().count() as u16 + 4))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(1)
        .split(area);

    for (i, label) in labels.iter().enumerate() {
        render_button(frame, chunks[i], label, selected == Some(i));
    }
}
