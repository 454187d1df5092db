use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use driftdeck_core::config::KeymapConfig;
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
    /// Primary key bindings
    bindings: HashMap<KeyBinding, Action>,
    /// Special handling for the "gg" sequence: the action it triggers
    pending_g_action: Option<Action>,
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
        let mut pending_g_action = None;

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            // Handle special "gg" sequence
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

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
                warn!("Invalid key binding: '{}', using default", key_str);
            }
        };

        // Add all configured bindings
        add_binding(&config.quit, Action::Quit);
        add_binding(&config.next_slide, Action::NextSlide);
        add_binding(&config.prev_slide, Action::PrevSlide);
        add_binding(&config.first_slide, Action::FirstSlide);
        add_binding(&config.last_slide, Action::LastSlide);

        // Add hardcoded bindings that shouldn't be configurable
        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // Presentation-style navigation (always available as alternatives)
        bindings
            .entry(KeyBinding::simple(KeyCode::Down))
            .or_insert(Action::NextSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::Up))
            .or_insert(Action::PrevSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageDown))
            .or_insert(Action::NextSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageUp))
            .or_insert(Action::PrevSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::Char(' ')))
            .or_insert(Action::NextSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::Enter))
            .or_insert(Action::NextSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::Home))
            .or_insert(Action::FirstSlide);
        bindings
            .entry(KeyBinding::simple(KeyCode::End))
            .or_insert(Action::LastSlide);

        Self {
            bindings,
            pending_g_action,
        }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<Action> {
        self.bindings.get(binding).copied()
    }

    /// The action for a completed "gg" sequence, if configured
    pub fn pending_g_action(&self) -> Option<Action> {
        self.pending_g_action
    }

    /// Check if a single 'g' press should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "q", etc.
/// - Uppercase (Shift): "G", "N", etc.
/// - Ctrl: "<C-j>", "<C-k>", etc.
/// - Shift: "<S-Tab>", "<S-g>", etc.
/// - Special keys: "<CR>", "<Enter>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>", "<Up>", "<Down>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    // Handle special notation <...>
    if s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    // Single character
    if s.len() == 1 {
        let c = s.chars().next()?;
        // Uppercase letters are Shift+lowercase
        if c.is_ascii_uppercase() {
            return Some(KeyBinding::shift(KeyCode::Char(c)));
        }
        return Some(KeyBinding::simple(KeyCode::Char(c)));
    }

    // "gg" is handled specially by Keymap, not here
    if s == "gg" {
        return Some(KeyBinding::simple(KeyCode::Char('g')));
    }

    None
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    // Handle modifiers: C- (Ctrl), S- (Shift)
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    // Handle special key names without modifiers
    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "j" in "<C-j>")
            if name.len() == 1 {
                let c = name.chars().next()?;
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
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
            parse_key_binding("q"),
            Some(KeyBinding::simple(KeyCode::Char('q')))
        );
    }

    #[test]
    fn test_parse_uppercase_keys() {
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
    }

    #[test]
    fn test_parse_ctrl_keys() {
        assert_eq!(
            parse_key_binding("<C-d>"),
            Some(KeyBinding::ctrl(KeyCode::Char('d')))
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<Space>"),
            Some(KeyBinding::simple(KeyCode::Char(' ')))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(parse_key_binding("<what>"), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let config = KeymapConfig::default();
        let keymap = Keymap::from_config(&config);

        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('j'))),
            Some(Action::NextSlide)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Down)),
            Some(Action::NextSlide)
        );
        assert_eq!(
            keymap.get(&KeyBinding::shift(KeyCode::Char('G'))),
            Some(Action::LastSlide)
        );

        // Check gg handling
        assert!(keymap.is_g_prefix(&KeyBinding::simple(KeyCode::Char('g'))));
        assert_eq!(keymap.pending_g_action(), Some(Action::FirstSlide));
    }
}
