//! Onboarding wizard screen

use super::components::{render_button_row, BUTTON_HEIGHT};
use super::forms::{draw_field_lines, draw_field_with_value, FIELD_HEIGHT};
use super::layout::centered_column;
use crate::state::wizard::{FieldSpec, InputKind, STEPS};
use crate::state::OnboardingScreen;
use crate::ui::components::wrap_text;
use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 72;
/// Document rows shown before the list is summarized
const MAX_DOCUMENT_ROWS: usize = 6;

pub fn draw(frame: &mut Frame, area: Rect, screen: &OnboardingScreen) {
    let column = centered_column(area, FORM_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Step indicator
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Actions row
        ])
        .split(column);

    draw_step_indicator(frame, chunks[0], screen);
    draw_fields(frame, chunks[1], screen);

    let actions = screen.actions();
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    let selected = screen
        .is_actions_row_active()
        .then_some(screen.selected_button);
    render_button_row(frame, chunks[2], &labels, selected);
}

/// "● Personal ─ ○ Education ─ ..." with the active step highlighted
fn draw_step_indicator(frame: &mut Frame, area: Rect, screen: &OnboardingScreen) {
    let active = screen.wizard.active_step();
    let mut spans = Vec::new();
    for (i, step) in STEPS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─ ", theme::muted()));
        }
        let (marker, style) = match i.cmp(&active) {
            std::cmp::Ordering::Less => ("●", theme::focused()),
            std::cmp::Ordering::Equal => ("●", theme::highlight()),
            std::cmp::Ordering::Greater => ("○", theme::muted()),
        };
        spans.push(Span::styled(format!("{marker} {}", step.title), style));
    }
    if screen.wizard.is_submitted() {
        spans.push(Span::styled("   ✔ Submitted", theme::highlight()));
    }

    let title = Line::from(Span::styled(
        format!(
            "Step {} of {}: {}",
            active + 1,
            screen.wizard.step_count(),
            screen.wizard.current_step().title
        ),
        Style::default().fg(theme::TEXT),
    ));
    frame.render_widget(Paragraph::new(vec![Line::from(spans), title]), area);
}

fn field_height(screen: &OnboardingScreen, index: usize, spec: &FieldSpec) -> u16 {
    match spec.input {
        InputKind::MultiSelect(options) if screen.focus == index => options.len() as u16 + 2,
        InputKind::Documents => {
            let rows = screen.wizard.documents().len().clamp(1, MAX_DOCUMENT_ROWS + 1);
            rows as u16 + 2
        }
        _ => FIELD_HEIGHT,
    }
}

/// First field to draw so that the focused one fits in `available` rows
pub fn first_visible(heights: &[u16], focus: usize, available: u16) -> usize {
    let focus = focus.min(heights.len().saturating_sub(1));
    let mut start = 0;
    while start < focus && heights[start..=focus].iter().sum::<u16>() > available {
        start += 1;
    }
    start
}

fn draw_fields(frame: &mut Frame, area: Rect, screen: &OnboardingScreen) {
    let fields = screen.wizard.current_step().fields;
    let heights: Vec<u16> = fields
        .iter()
        .enumerate()
        .map(|(i, spec)| field_height(screen, i, spec))
        .collect();

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (index, spec) in fields
        .iter()
        .enumerate()
        .skip(first_visible(&heights, screen.focus, area.height))
    {
        let height = heights[index];
        if y + height > bottom {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_wizard_field(frame, field_area, screen, index, spec);
        y += height;
    }
}

fn draw_wizard_field(
    frame: &mut Frame,
    area: Rect,
    screen: &OnboardingScreen,
    index: usize,
    spec: &FieldSpec,
) {
    let store = screen.wizard.fields();
    let is_active = screen.focus == index;
    let error = store.visible_error(spec.name);
    let value = store.value(spec.name);

    match spec.input {
        InputKind::Text => {
            let text = value.map(|v| v.as_text()).unwrap_or_default();
            draw_field_with_value(frame, area, spec.label, text, is_active, error);
        }
        InputKind::DatePicker => {
            let text = value.map(|v| v.as_text()).unwrap_or_default();
            let shown = if text.is_empty() && is_active {
                "Press Enter to pick a date"
            } else {
                text
            };
            draw_field_with_value(frame, area, spec.label, shown, is_active, error);
        }
        InputKind::MultiSelect(options) if is_active => {
            let lines = options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let checked =
                        value.is_some_and(|v| v.selected_items().iter().any(|s| s == option));
                    let mark = if checked { "[x]" } else { "[ ]" };
                    let style = if i == screen.option_cursor {
                        theme::highlight()
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(format!("{mark} {option}"), style))
                })
                .collect();
            draw_field_lines(frame, area, spec.label, lines, true, error);
        }
        InputKind::MultiSelect(_) => {
            let text = value.map(|v| v.display_value()).unwrap_or_default();
            draw_field_with_value(frame, area, spec.label, &text, false, error);
        }
        InputKind::Documents => {
            let lines = document_lines(screen, area.width.saturating_sub(2) as usize);
            draw_field_lines(frame, area, spec.label, lines, is_active, error);
        }
    }
}

fn document_lines(screen: &OnboardingScreen, width: usize) -> Vec<Line<'static>> {
    let docs = screen.wizard.documents();
    if docs.is_empty() {
        let hint = "No documents attached. Press Enter to browse images and PDFs.";
        return wrap_text(hint, width.max(1))
            .into_iter()
            .take(1)
            .map(|line| Line::from(Span::styled(line, theme::muted())))
            .collect();
    }
    let mut lines: Vec<Line> = docs
        .iter()
        .take(MAX_DOCUMENT_ROWS)
        .map(|doc| {
            Line::from(vec![
                Span::raw(format!("• {}", doc.name)),
                Span::styled(format!("  {}", doc.mime_type), theme::muted()),
            ])
        })
        .collect();
    if docs.len() > MAX_DOCUMENT_ROWS {
        lines.push(Line::from(Span::styled(
            format!("… and {} more", docs.len() - MAX_DOCUMENT_ROWS),
            theme::muted(),
        )));
    }
    lines
}
