//! Keyboard accelerators
//!
//! Typing a button's label triggers that button. The map is built once from
//! the keypad and holds actions, not widgets, so dispatch works the same
//! from the window, a test, or a headless driver.

use std::collections::HashMap;

use crate::engine::Action;
use crate::keypad::Keypad;

/// Non-character keys with a fixed meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Escape,
    Backspace,
}

#[derive(Debug, Clone)]
pub struct Accelerators {
    by_char: HashMap<char, Action>,
    named_keys: bool,
}

impl Accelerators {
    /// Map every keypad label to its button's action.
    pub fn new(keypad: &Keypad) -> Self {
        let by_char = keypad.buttons().map(|b| (b.label, b.action)).collect();
        Self { by_char, named_keys: true }
    }

    /// Enable or disable the Enter/Escape/Backspace shortcuts.
    pub fn with_named_keys(mut self, enabled: bool) -> Self {
        self.named_keys = enabled;
        self
    }

    /// Look up the typed character exactly as reported.
    pub fn lookup(&self, c: char) -> Option<Action> {
        self.by_char.get(&c).copied()
    }

    /// Enter, Escape and Backspace, unless disabled.
    pub fn lookup_named(&self, key: NamedKey) -> Option<Action> {
        if !self.named_keys {
            return None;
        }
        Some(match key {
            NamedKey::Enter => Action::Equals,
            NamedKey::Escape | NamedKey::Backspace => Action::Clear,
        })
    }

    /// Actions for each recognised character of a text event, in order.
    pub fn actions_for_text<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Action> + 'a {
        text.chars().filter_map(|c| self.lookup(c))
    }

    pub fn len(&self) -> usize {
        self.by_char.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_char.is_empty()
    }
}

impl Default for Accelerators {
    fn default() -> Self {
        Self::new(&Keypad::new())
    }
}
