//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button_row, BUTTON_HEIGHT};
pub use dialog::{render_date_picker, render_document_picker, wrap_text};
