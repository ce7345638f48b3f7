//! Colors shared by every screen

use ratatui::style::{Color, Modifier, Style};

/// Brand green
pub const PRIMARY: Color = Color::Rgb(0x0D, 0x9E, 0x6A);
pub const ERROR: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;
pub const TEXT: Color = Color::White;

pub fn focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn highlight() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn error() -> Style {
    Style::default().fg(ERROR)
}
