//! Login and signup screens

use super::components::{render_button_row, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_help_text, FIELD_HEIGHT};
use super::layout::centered_column;
use crate::state::{Form, LoginAction, LoginForm, SignupAction, SignupForm};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 64;

pub fn draw_login(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let labels: Vec<&str> = LoginAction::ALL.iter().map(LoginAction::label).collect();
    draw_form_screen(
        frame,
        area,
        "Welcome Back",
        "Log in to continue your application.",
        form,
        &labels,
    );
}

pub fn draw_signup(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let labels: Vec<&str> = SignupAction::ALL.iter().map(SignupAction::label).collect();
    draw_form_screen(
        frame,
        area,
        "Create Account",
        "Sign up to start studying abroad.",
        form,
        &labels,
    );
}

/// Title, the form's text fields top to bottom, then its buttons row
fn draw_form_screen<F: Form>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    form: &F,
    buttons: &[&str],
) {
    let column = centered_column(area, FORM_WIDTH);
    let field_count = form.field_count() - 1;

    let mut constraints = vec![Constraint::Length(3)]; // Title + subtitle + blank
    constraints.extend(std::iter::repeat(Constraint::Length(FIELD_HEIGHT)).take(field_count));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), theme::highlight())),
        Line::from(Span::styled(subtitle.to_string(), theme::muted())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    for index in 0..field_count {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index + 1], field, form.active_field() == index);
        }
    }

    let selected = form
        .is_buttons_row_active()
        .then(|| form.selected_button());
    render_button_row(frame, chunks[field_count + 1], buttons, selected);

    draw_help_text(
        frame,
        chunks[field_count + 2],
        "Tab to move between fields, ←/→ to pick a button",
    );
}
