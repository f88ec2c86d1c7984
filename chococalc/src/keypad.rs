//! Keypad layout
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ c ] [ = ] [ + ]
//! ```

use crate::engine::Action;

pub const ROWS: usize = 4;
pub const COLS: usize = 4;

/// Button labels, row by row.
pub const LAYOUT: [[char; COLS]; ROWS] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['0', 'c', '=', '+'],
];

/// Visual role of a button. The UI styles `Equals` apart from the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Clear,
    Equals,
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: char,
    pub action: Action,
}

impl KeypadButton {
    pub fn kind(&self) -> ButtonKind {
        match self.action {
            Action::Digit(_) => ButtonKind::Digit,
            Action::Operator(_) => ButtonKind::Operator,
            Action::Clear => ButtonKind::Clear,
            Action::Equals => ButtonKind::Equals,
        }
    }
}

/// The 4x4 grid of buttons.
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        let rows = LAYOUT
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|&label| {
                        Action::from_label(label).map(|action| KeypadButton { label, action })
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }
}
