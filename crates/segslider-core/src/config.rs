use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Rgba, TileVariant};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Initial state of the slider control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default = "default_value")]
    pub value: f64,
    #[serde(default)]
    pub minimum_value: f64,
    #[serde(default = "default_maximum_value")]
    pub maximum_value: f64,
    /// Segments in each section
    #[serde(default = "default_segment_count")]
    pub segment_count: u32,
    /// Sections the range is divided into
    #[serde(default = "default_section_count")]
    pub section_count: u32,
    /// Section width in points; smaller than the minimum is ignored
    #[serde(default)]
    pub section_width: f64,
    #[serde(default = "default_separator_line_width")]
    pub separator_line_width: f64,
    #[serde(default)]
    pub separator_line_height_difference: f64,
    /// Hex color of the separators (e.g., "#ffffff")
    #[serde(default)]
    pub segment_color: Rgba,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// "section" or "replicated_edge"
    #[serde(default)]
    pub variant: TileVariant,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: default_value(),
            minimum_value: 0.0,
            maximum_value: default_maximum_value(),
            segment_count: default_segment_count(),
            section_count: default_section_count(),
            section_width: 0.0,
            separator_line_width: default_separator_line_width(),
            separator_line_height_difference: 0.0,
            segment_color: Rgba::WHITE,
            enabled: default_true(),
            variant: TileVariant::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Slider points covered by one terminal column
    #[serde(default = "default_points_per_cell")]
    pub points_per_cell: f64,
    /// Value change per increment/decrement key press
    #[serde(default = "default_step")]
    pub step: f64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            points_per_cell: default_points_per_cell(),
            step: default_step(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Strip background
    pub background: Option<String>,
    /// Center indicator
    pub indicator: Option<String>,
    /// Labels and readouts
    pub text: Option<String>,
    /// Hints, event log and idle borders
    pub muted: Option<String>,
    /// Status bar background
    pub status: Option<String>,
    /// Color used while the control is disabled
    pub disabled: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-j>" (Ctrl+j), "<S-Tab>", "<Left>", "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Scroll the strip one cell to the left
    #[serde(default = "default_key_nudge_left")]
    pub nudge_left: String,
    /// Scroll the strip one cell to the right
    #[serde(default = "default_key_nudge_right")]
    pub nudge_right: String,
    /// Add `ui.step` to the value
    #[serde(default = "default_key_increment")]
    pub increment: String,
    /// Subtract `ui.step` from the value
    #[serde(default = "default_key_decrement")]
    pub decrement: String,
    #[serde(default = "default_key_toggle_enabled")]
    pub toggle_enabled: String,
    /// Switch between the section and replicated-edge tile layouts
    #[serde(default = "default_key_toggle_variant")]
    pub toggle_variant: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            nudge_left: default_key_nudge_left(),
            nudge_right: default_key_nudge_right(),
            increment: default_key_increment(),
            decrement: default_key_decrement(),
            toggle_enabled: default_key_toggle_enabled(),
            toggle_variant: default_key_toggle_variant(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_nudge_left() -> String { "h".to_string() }
fn default_key_nudge_right() -> String { "l".to_string() }
fn default_key_increment() -> String { "k".to_string() }
fn default_key_decrement() -> String { "j".to_string() }
fn default_key_toggle_enabled() -> String { "e".to_string() }
fn default_key_toggle_variant() -> String { "v".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_value() -> f64 {
    0.5
}

fn default_maximum_value() -> f64 {
    1.0
}

fn default_segment_count() -> u32 {
    4
}

fn default_section_count() -> u32 {
    1
}

fn default_separator_line_width() -> f64 {
    2.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_points_per_cell() -> f64 {
    2.0
}

fn default_step() -> f64 {
    0.1
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaulting when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/segslider/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("segslider")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.slider.segment_count, 4);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.slider.maximum_value = 10.0;
        config.slider.segment_color = Rgba::rgb(0x12, 0x34, 0x56);
        config.slider.variant = TileVariant::ReplicatedEdge;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.slider.maximum_value, 10.0);
        assert_eq!(loaded.slider.segment_color, Rgba::rgb(0x12, 0x34, 0x56));
        assert_eq!(loaded.slider.variant, TileVariant::ReplicatedEdge);
    }

    #[test]
    fn test_partial_file() {
        let config: AppConfig = toml::from_str(
            r##"
            [slider]
            section_count = 3
            segment_color = "#f00"

            [ui]
            theme = "nord"
            "##,
        )
        .unwrap();
        assert_eq!(config.slider.section_count, 3);
        assert_eq!(config.slider.segment_count, 4);
        assert_eq!(config.slider.segment_color, Rgba::rgb(0xff, 0, 0));
        assert_eq!(config.ui.theme.name, "nord");
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_theme_table_form() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { indicator = "#ff0000" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.indicator.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_invalid_color_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[slider]\nsegment_color = \"nope\"\n").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
