//! Layout components (header, content column, status bar)

use crate::app::App;
use crate::platform::{
    COPY_SHORTCUT, DOCUMENTS_SHORTCUT, NEXT_SHORTCUT, PREVIOUS_SHORTCUT, SUBMIT_SHORTCUT,
};
use crate::state::View;
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Horizontally centered column at most `max_width` wide
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Push content down by the entrance animation offset
pub fn with_entrance_offset(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.height);
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

/// Draw the header: title on the left, optional tracking id on the right
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str, tracking_id: Option<&str>) {
    let title_line = Line::from(vec![
        Span::styled(" ◆ ", theme::highlight()),
        Span::styled(title.to_string(), theme::highlight()),
    ]);
    frame.render_widget(Paragraph::new(title_line), area);

    if let Some(id) = tracking_id {
        let id_line = Line::from(vec![
            Span::styled("Tracking ID: ", theme::muted()),
            Span::styled(id.to_string(), Style::default().fg(theme::TEXT)),
            Span::raw(" "),
        ]);
        frame.render_widget(
            Paragraph::new(id_line).alignment(Alignment::Right),
            area,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = if app.state.date_picker.is_some() || app.state.document_picker.is_some() {
        "Enter:confirm  Esc:cancel".to_string()
    } else {
        get_view_hints(app.state.current_view)
    };
    let spans = vec![
        Span::styled(format!(" {} ", app.state.current_view.route()), theme::highlight()),
        Span::styled(hints, Style::default().fg(theme::TEXT)),
    ];

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::MUTED));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint).style(Style::default().bg(theme::MUTED));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Login | View::Signup => "Tab:next  ←/→:button  Enter:select".to_string(),
        View::Onboarding => format!(
            "Tab:next  {NEXT_SHORTCUT}:next  {PREVIOUS_SHORTCUT}:prev  {SUBMIT_SHORTCUT}:submit  \
             {DOCUMENTS_SHORTCUT}:docs  {COPY_SHORTCUT}:copy id  Esc:back"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 2, 100, 20);
        assert_eq!(centered_column(area, 60), Rect::new(20, 2, 60, 20));
        assert_eq!(centered_column(area, 200), area);
    }

    #[test]
    fn test_entrance_offset_shrinks_area() {
        let area = Rect::new(0, 2, 80, 20);
        assert_eq!(with_entrance_offset(area, 6), Rect::new(0, 8, 80, 14));
        assert_eq!(with_entrance_offset(area, 0), area);
        assert_eq!(with_entrance_offset(area, 50).height, 0);
    }

    #[test]
    fn test_onboarding_hints_name_shortcuts() {
        let hints = get_view_hints(View::Onboarding);
        assert!(hints.contains(NEXT_SHORTCUT));
        assert!(hints.contains(DOCUMENTS_SHORTCUT));
    }
}
