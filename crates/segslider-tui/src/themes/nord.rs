//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        indicator: Color::Rgb(0xeb, 0xcb, 0x8b),  // nord13
        text: Color::Rgb(0xec, 0xef, 0xf4),       // nord6
        muted: Color::Rgb(0xd8, 0xde, 0xe9),      // nord4
        status: Color::Rgb(0x43, 0x4c, 0x5e),     // nord2
        disabled: Color::Rgb(0x4c, 0x56, 0x6a),   // nord3
    }
}
