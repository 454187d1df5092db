use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    /// Navigate to an explicit slide index
    GoToSlide(usize),
    PendingG, // First 'g' press, waiting for second 'g'
    None,
}

/// Handle a key event and return the corresponding action
///
/// `pending_g` is true when the previous key was the first half of a
/// configured "gg" sequence.
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap, pending_g: bool) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);

    if pending_g {
        if let Some(action) = keymap.pending_g_action() {
            if binding.code == KeyCode::Char('g') && binding.modifiers == KeyModifiers::NONE {
                return action;
            }
        }
        // fall through: the second key is handled on its own
    }

    if keymap.is_g_prefix(&binding) {
        return Action::PendingG;
    }

    if let Some(action) = keymap.get(&binding) {
        return action;
    }

    // Number keys map to explicit slide navigation (1-based)
    if let (KeyCode::Char(c), KeyModifiers::NONE) = (key.code, key.modifiers) {
        if let Some(digit) = c.to_digit(10) {
            if digit > 0 {
                return Action::GoToSlide(digit as usize - 1);
            }
        }
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftdeck_core::config::KeymapConfig;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::from_config(&KeymapConfig::default());
        assert_eq!(handle_key_event(key('q'), &keymap, false), Action::Quit);
        assert_eq!(handle_key_event(key('j'), &keymap, false), Action::NextSlide);
        assert_eq!(handle_key_event(key('k'), &keymap, false), Action::PrevSlide);
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::from_config(&KeymapConfig::default());
        assert_eq!(handle_key_event(key('g'), &keymap, false), Action::PendingG);
        assert_eq!(handle_key_event(key('g'), &keymap, true), Action::FirstSlide);
        // a different second key abandons the sequence
        assert_eq!(handle_key_event(key('j'), &keymap, true), Action::NextSlide);
    }

    #[test]
    fn test_number_keys_navigate() {
        let keymap = Keymap::from_config(&KeymapConfig::default());
        assert_eq!(
            handle_key_event(key('1'), &keymap, false),
            Action::GoToSlide(0)
        );
        assert_eq!(
            handle_key_event(key('7'), &keymap, false),
            Action::GoToSlide(6)
        );
        // zero is not a slide
        assert_eq!(handle_key_event(key('0'), &keymap, false), Action::None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let keymap = Keymap::from_config(&KeymapConfig::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &keymap, false), Action::Quit);
    }
}
