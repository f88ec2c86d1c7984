//! Headless driver
//!
//! Drives the engine without a window. The same trait is what a test or any
//! other front end needs: press buttons, type keys, read the display.

use crate::accelerators::{Accelerators, NamedKey};
use crate::display::format_display;
use crate::engine::{Action, State};

pub trait CalculatorDriver {
    /// Press one button.
    fn press(&mut self, action: Action);

    /// Type characters as if they were keyboard accelerators.
    /// Characters without a button are ignored.
    fn type_keys(&mut self, keys: &str);

    /// Press a non-character key.
    fn press_named(&mut self, key: NamedKey);

    /// Current engine state.
    fn state(&self) -> State;

    /// The rendered display text.
    fn display(&self) -> String {
        format_display(self.state().display())
    }
}

/// Owns one `State` cell and the accelerator map.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDriver {
    state: State,
    accelerators: Accelerators,
}

impl HeadlessDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accelerators(accelerators: Accelerators) -> Self {
        Self {
            state: State::new(),
            accelerators,
        }
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, action: Action) {
        let next = self.state.apply(action);
        tracing::trace!(%action, before = ?self.state, after = ?next, "transition");
        self.state = next;
    }

    fn type_keys(&mut self, keys: &str) {
        let actions: Vec<Action> = self.accelerators.actions_for_text(keys).collect();
        for action in actions {
            self.press(action);
        }
    }

    fn press_named(&mut self, key: NamedKey) {
        if let Some(action) = self.accelerators.lookup_named(key) {
            self.press(action);
        }
    }

    fn state(&self) -> State {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    #[test]
    fn test_typing_a_sum() {
        let mut driver = HeadlessDriver::new();
        driver.type_keys("12+30=");
        assert_eq!(driver.display(), "42");
    }

    #[test]
    fn test_press_and_type_agree() {
        let mut typed = HeadlessDriver::new();
        typed.type_keys("9*");

        let mut pressed = HeadlessDriver::new();
        pressed.press(Action::from_label('9').unwrap());
        pressed.press(Action::Operator(Operator::Multiply));

        assert_eq!(typed.state(), pressed.state());
    }

    #[test]
    fn test_named_keys() {
        let mut driver = HeadlessDriver::new();
        driver.type_keys("7-2");
        driver.press_named(NamedKey::Enter);
        assert_eq!(driver.display(), "5");

        driver.press_named(NamedKey::Escape);
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_named_keys_disabled() {
        let accel = Accelerators::default().with_named_keys(false);
        let mut driver = HeadlessDriver::with_accelerators(accel);
        driver.type_keys("7-2");
        driver.press_named(NamedKey::Enter);
        assert_eq!(driver.display(), "2");
    }

    #[test]
    fn test_divide_by_zero_renders_infinity() {
        let mut driver = HeadlessDriver::new();
        driver.type_keys("5/0=");
        assert_eq!(driver.display(), "Infinity");
    }
}
