use ratatui::style::Color;
use segslider_core::Rgba;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Strip background
    pub background: Color,
    /// Center indicator
    pub indicator: Color,
    /// Labels and readouts
    pub text: Color,
    /// Secondary text (hints, log)
    pub muted: Color,
    /// Status bar background
    pub status: Color,
    /// Separators while the control is disabled
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            background: Color::Rgb(0x28, 0x28, 0x28),
            indicator: Color::Rgb(0xd8, 0xa6, 0x57),
            text: Color::Rgb(0xd4, 0xbe, 0x98),
            muted: Color::Rgb(0xa8, 0x99, 0x84),
            status: Color::Rgb(0x45, 0x40, 0x3d),
            disabled: Color::Rgb(0x7c, 0x6f, 0x64),
        }
    }
}

/// Terminal color for a separator tinted with `color` at `opacity`,
/// blended over `background` since terminal cells have no alpha
pub fn blend(color: Rgba, opacity: f64, background: Color) -> Color {
    let alpha = (color.a as f64 / 255.0) * opacity.clamp(0.0, 1.0);
    let (br, bg, bb) = match background {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let mix = |fg: u8, bg: u8| (fg as f64 * alpha + bg as f64 * (1.0 - alpha)).round() as u8;
    Color::Rgb(mix(color.r, br), mix(color.g, bg), mix(color.b, bb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_opaque() {
        let color = blend(Rgba::WHITE, 1.0, Color::Rgb(0, 0, 0));
        assert_eq!(color, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_blend_transparent() {
        let color = blend(Rgba::WHITE, 0.0, Color::Rgb(10, 20, 30));
        assert_eq!(color, Color::Rgb(10, 20, 30));
    }

    #[test]
    fn test_blend_half() {
        let color = blend(Rgba::rgb(200, 100, 0), 0.5, Color::Rgb(0, 0, 100));
        assert_eq!(color, Color::Rgb(100, 50, 50));
    }
}
