//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Dracula default theme
pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36), // Background
        indicator: Color::Rgb(0xbd, 0x93, 0xf9),  // Purple
        text: Color::Rgb(0xf8, 0xf8, 0xf2),       // Foreground
        muted: Color::Rgb(0x7a, 0x7c, 0x8d),      // Lighter gray
        status: Color::Rgb(0x44, 0x47, 0x5a),     // Selection
        disabled: Color::Rgb(0x62, 0x72, 0xa4),   // Comment
    }
}
