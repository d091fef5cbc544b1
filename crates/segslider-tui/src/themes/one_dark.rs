//! One Dark theme
//! https://github.com/atom/atom/tree/master/packages/one-dark-syntax

use ratatui::style::Color;
use crate::theme::Theme;

/// One Dark default theme
pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2c, 0x34), // bg
        indicator: Color::Rgb(0xe5, 0xc0, 0x7b),  // yellow
        text: Color::Rgb(0xab, 0xb2, 0xbf),       // fg
        muted: Color::Rgb(0x7f, 0x84, 0x8e),      // lighter gray
        status: Color::Rgb(0x3e, 0x44, 0x51),     // bg-highlight
        disabled: Color::Rgb(0x5c, 0x63, 0x70),   // comment
    }
}
