//! UI module for rendering the TUI

mod auth;
mod components;
mod forms;
mod layout;
mod onboarding;
mod theme;
mod toast;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, content_area) = layout::create_layout(area);

    let tracking_id = app
        .state
        .onboarding
        .as_ref()
        .filter(|_| app.state.current_view == View::Onboarding)
        .map(|screen| screen.tracking_id.as_str());
    layout::draw_header(frame, header_area, "Study Abroad Onboarding", tracking_id);

    // Entrance animation slides the content up into place
    let content_area = layout::with_entrance_offset(content_area, app.state.entrance.row_offset());

    match app.state.current_view {
        View::Login => auth::draw_login(frame, content_area, &app.state.login),
        View::Signup => auth::draw_signup(frame, content_area, &app.state.signup),
        View::Onboarding => {
            if let Some(screen) = &app.state.onboarding {
                onboarding::draw(frame, content_area, screen);
            }
        }
    }

    layout::draw_status_bar(frame, app);

    // Modal dialogs
    if let Some(dialog) = &app.state.date_picker {
        components::render_date_picker(frame, dialog);
    }
    if let Some(dialog) = &app.state.document_picker {
        components::render_document_picker(frame, dialog);
    }

    // Toasts float over everything
    if let Some(toast) = app.state.toasts.current() {
        toast::draw(frame, toast);
    }
}
