//! RGBA colors with hex string notation
//!
//! Colors are written in config files as "#RRGGBB", "RRGGBB", "#RGB" or
//! "#RRGGBBAA" and serialized back as "#RRGGBB" / "#RRGGBBAA".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha scaled by `opacity` (clamped to [0, 1])
    pub fn with_opacity(self, opacity: f64) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            a: (self.a as f64 * opacity).round() as u8,
            ..self
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColor(s.to_string());

        if !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            // Short form: RGB -> RRGGBB
            3 => Ok(Rgba::rgb(byte(0..1)? * 17, byte(1..2)? * 17, byte(2..3)? * 17)),
            6 => Ok(Rgba::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Rgba::rgba(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("#ffffff".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!("f80".parse::<Rgba>().unwrap(), Rgba::rgb(0xff, 0x88, 0x00));
        assert_eq!(
            "#10203040".parse::<Rgba>().unwrap(),
            Rgba::rgba(0x10, 0x20, 0x30, 0x40)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("zzzzzz".parse::<Rgba>().is_err());
        assert!("#ééé".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::rgb(0x0a, 0xbc, 0xff).to_string(), "#0abcff");
        assert_eq!(Rgba::rgba(0, 0, 0, 0x80).to_string(), "#00000080");
    }

    #[test]
    fn test_with_opacity() {
        assert_eq!(Rgba::WHITE.with_opacity(0.5).a, 128);
        assert_eq!(Rgba::WHITE.with_opacity(2.0).a, 255);
    }
}
