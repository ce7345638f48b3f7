//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a single-line field (borders + content)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a login/signup form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    draw_field_with_value(
        frame,
        area,
        &field.label,
        &field.display_value(),
        is_active,
        None,
    );
}

/// Draw a bordered input with its label in the top border and the error,
/// if any, in the bottom border
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error, is_active) {
        (Some(_), _) => theme::error(),
        (None, true) => theme::focused(),
        (None, false) => theme::muted(),
    };

    let (display_value, value_style) = if value.is_empty() && !is_active {
        ("(empty)", theme::muted())
    } else {
        (value, Style::default())
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, theme::focused()),
    ]));

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(format!(" {error} "), theme::error())));
    }

    frame.render_widget(content.block(block), area);
}

/// Draw a bordered block of pre-built lines, styled like an input
pub fn draw_field_lines(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    lines: Vec<Line>,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error, is_active) {
        (Some(_), _) => theme::error(),
        (None, true) => theme::focused(),
        (None, false) => theme::muted(),
    };
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(format!(" {error} "), theme::error())));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw help text below a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(text, theme::muted())));
    frame.render_widget(help, area);
}
