use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use segslider_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for efficient key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.nudge_left, Action::NudgeLeft);
        add_binding(&config.nudge_right, Action::NudgeRight);
        add_binding(&config.increment, Action::Increment);
        add_binding(&config.decrement, Action::Decrement);
        add_binding(&config.toggle_enabled, Action::ToggleEnabled);
        add_binding(&config.toggle_variant, Action::ToggleVariant);

        // Hardcoded bindings that shouldn't be configurable
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::NudgeLeft);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::NudgeRight);
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::Increment);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::Decrement);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::CancelDrag);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }
}

/// Parse a binding in Vim notation.
///
/// A bare character binds that key, with uppercase letters meaning Shift.
/// Angle brackets name special keys and take `C-`/`S-` prefixes, which may
/// be combined: `<C-l>`, `<S-Tab>`, `<C-S-Left>`, `<Space>`.
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) else {
        let c = single_char(s)?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyBinding::new(KeyCode::Char(c), modifiers));
    };

    let mut modifiers = KeyModifiers::NONE;
    let mut name = inner;
    loop {
        if let Some(rest) = name.strip_prefix("C-") {
            modifiers |= KeyModifiers::CONTROL;
            name = rest;
        } else if let Some(rest) = name.strip_prefix("S-") {
            modifiers |= KeyModifiers::SHIFT;
            name = rest;
        } else {
            break;
        }
    }

    Some(KeyBinding::new(parse_key_name(name)?, modifiers))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Key code for a name inside angle brackets, without modifiers
fn parse_key_name(name: &str) -> Option<KeyCode> {
    let code = match name.to_ascii_lowercase().as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => KeyCode::Char(single_char(name)?.to_ascii_lowercase()),
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("j"),
            Some(KeyBinding::simple(KeyCode::Char('j')))
        );
        assert_eq!(
            parse_key_binding("+"),
            Some(KeyBinding::simple(KeyCode::Char('+')))
        );
        assert_eq!(
            parse_key_binding("H"),
            Some(KeyBinding::shift(KeyCode::Char('H')))
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<C-l>"),
            Some(KeyBinding::ctrl(KeyCode::Char('l')))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<Left>"),
            Some(KeyBinding::simple(KeyCode::Left))
        );
        assert_eq!(
            parse_key_binding("<C-S-Right>"),
            Some(KeyBinding::new(
                KeyCode::Right,
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            ))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_key_binding(""), None);
        assert_eq!(parse_key_binding("gg"), None);
        assert_eq!(parse_key_binding("<Bogus>"), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('h'))),
            Some(&Action::NudgeLeft)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Up)),
            Some(&Action::Increment)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Esc)),
            Some(&Action::CancelDrag)
        );
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            nudge_left: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        // Arrow fallback still reaches the action
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Left)),
            Some(&Action::NudgeLeft)
        );
    }
}
