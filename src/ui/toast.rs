//! Bottom-positioned toast overlay

use super::components::wrap_text;
use crate::state::{NotificationKind, Toast};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 50;

/// Area for a toast of `lines` lines, centered just above the status bar
pub fn toast_area(screen: Rect, lines: u16, width: u16) -> Rect {
    let height = (lines + 2).min(screen.height);
    let width = width.min(screen.width);
    Rect {
        x: screen.x + (screen.width - width) / 2,
        // Leave the status bar row free
        y: (screen.y + screen.height).saturating_sub(height + 1).max(screen.y),
        width,
        height,
    }
}

pub fn draw(frame: &mut Frame, toast: &Toast) {
    let color = match toast.notification.kind {
        NotificationKind::Success => theme::PRIMARY,
        NotificationKind::Error => theme::ERROR,
    };

    let wrapped = wrap_text(&toast.notification.message, (MAX_WIDTH - 4) as usize);
    let text_width = wrapped.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let area = toast_area(frame.area(), wrapped.len() as u16, text_width + 4);

    frame.render_widget(Clear, area);
    let lines: Vec<Line> = wrapped.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(paragraph, area);
}
