//! Document picker dialog

use super::base::{key_hints, render_dialog, DialogConfig};
use crate::state::DocumentPickerDialog;
use crate::ui::theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
    Frame,
};

/// Rows of candidates shown at once
const VISIBLE_ROWS: usize = 10;

/// Human-readable file size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{b} B"),
    }
}

/// Render the candidate list with selection marks
pub fn render_document_picker(frame: &mut Frame, dialog: &DocumentPickerDialog) {
    let mut body = Vec::new();

    if dialog.candidates.is_empty() {
        body.push(Line::from(Span::styled(
            "No images or PDFs found.",
            theme::muted(),
        )));
    }

    // Keep the cursor inside the window
    let start = dialog.cursor.saturating_sub(VISIBLE_ROWS - 1);
    for (i, doc) in dialog
        .candidates
        .iter()
        .enumerate()
        .skip(start)
        .take(VISIBLE_ROWS)
    {
        let mark = if dialog.is_selected(i) { "[x]" } else { "[ ]" };
        let style = if i == dialog.cursor {
            theme::highlight()
        } else {
            Style::default()
        };
        body.push(Line::from(vec![
            Span::styled(format!("{mark} {}", doc.name), style),
            Span::styled(format!("  {}", format_size(doc.size)), theme::muted()),
        ]));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Select Documents",
            title_color: theme::PRIMARY,
            border_color: theme::PRIMARY,
            body,
            hint: Some(key_hints(&[
                ("Space", "mark"),
                ("Enter", "attach"),
                ("Esc", "cancel"),
            ])),
            max_width: 70,
        },
    );
}
