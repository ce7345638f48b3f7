//! Date picker dialog

use super::base::{key_hints, render_dialog, DialogConfig};
use crate::state::DatePickerDialog;
use crate::ui::theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the date picker with the edited component highlighted
pub fn render_date_picker(frame: &mut Frame, dialog: &DatePickerDialog) {
    let [year, month, day] = dialog.parts();
    let part = |(text, active): (String, bool)| {
        let style = if active {
            theme::highlight().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Span::styled(text, style)
    };

    let body = vec![
        Line::from(vec![
            Span::raw("  "),
            part(year),
            Span::raw(" - "),
            part(month),
            Span::raw(" - "),
            part(day),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Latest: {}", dialog.max_date.format("%Y-%m-%d")),
            theme::muted(),
        )),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Select Date",
            title_color: theme::PRIMARY,
            border_color: theme::PRIMARY,
            body,
            hint: Some(key_hints(&[
                ("←/→", "part"),
                ("↑/↓", "change"),
                ("Enter", "confirm"),
                ("Esc", "cancel"),
            ])),
            max_width: 60,
        },
    );
}
