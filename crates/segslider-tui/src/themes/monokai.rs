//! Monokai theme
//! https://monokai.pro/

use ratatui::style::Color;
use crate::theme::Theme;

/// Monokai default theme
pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x27, 0x28, 0x22), // background
        indicator: Color::Rgb(0xe6, 0xdb, 0x74),  // yellow
        text: Color::Rgb(0xf8, 0xf8, 0xf2),       // foreground
        muted: Color::Rgb(0x90, 0x8c, 0x77),      // lighter gray
        status: Color::Rgb(0x49, 0x48, 0x3e),     // line
        disabled: Color::Rgb(0x75, 0x71, 0x5e),   // comment
    }
}
