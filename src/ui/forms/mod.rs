//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities

mod field_renderer;

pub use field_renderer::{
    draw_field, draw_field_lines, draw_field_with_value, draw_help_text, FIELD_HEIGHT,
};
