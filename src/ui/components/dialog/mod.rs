//! Dialog components for TUI

mod base;
mod date_picker;
mod document_picker;

pub use base::wrap_text;
pub use date_picker::render_date_picker;
pub use document_picker::render_document_picker;
