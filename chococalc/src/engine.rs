//! Calculator engine
//!
//! The whole calculator is one `Copy` record and one transition function.
//! UI layers own a single `State` cell and replace it after every action:
//!
//! ```
//! use chococalc::engine::{Action, Digit, Operator, State};
//!
//! let state = [
//!     Action::Digit(Digit::new(5).unwrap()),
//!     Action::Operator(Operator::Add),
//!     Action::Digit(Digit::new(3).unwrap()),
//!     Action::Equals,
//! ]
//! .into_iter()
//! .fold(State::default(), State::apply);
//!
//! assert_eq!(state.display(), 8.0);
//! ```

use std::fmt;

/// One of the four binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operation to two operands. Division by zero follows
    /// IEEE-754 and yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values above 9.
    pub fn new(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self(d))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Digit(Digit),
    Operator(Operator),
    Clear,
    Equals,
}

impl Action {
    /// Parse a keypad label (`0`-`9`, `+ - * /`, `c`, `=`).
    pub fn from_label(c: char) -> Option<Self> {
        match c {
            'c' => Some(Action::Clear),
            '=' => Some(Action::Equals),
            _ => Digit::from_char(c)
                .map(Action::Digit)
                .or_else(|| Operator::from_symbol(c).map(Action::Operator)),
        }
    }

    /// The label this action carries on the keypad.
    pub fn label(self) -> char {
        match self {
            Action::Digit(d) => d.to_char(),
            Action::Operator(op) => op.symbol(),
            Action::Clear => 'c',
            Action::Equals => '=',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Calculator registers.
///
/// `current_op` is the operator pressed but not yet followed by a digit.
/// `stack_op` is the operator captured when that digit arrived; `Equals`
/// reads it together with `stack`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    display: f64,
    stack: f64,
    current_op: Option<Operator>,
    stack_op: Option<Operator>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value currently shown.
    pub fn display(&self) -> f64 {
        self.display
    }

    /// The saved left-hand operand.
    pub fn stack(&self) -> f64 {
        self.stack
    }

    pub fn current_op(&self) -> Option<Operator> {
        self.current_op
    }

    pub fn stack_op(&self) -> Option<Operator> {
        self.stack_op
    }

    /// Transition to the next state. Every action is valid in every state.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Digit(d) => self.digit(d),
            Action::Operator(op) => Self {
                current_op: Some(op),
                ..self
            },
            // Only the display resets; a pending `stack_op` survives.
            Action::Clear => Self {
                display: 0.0,
                ..self
            },
            Action::Equals => self.equals(),
        }
    }

    fn digit(self, d: Digit) -> Self {
        let d = f64::from(d.value());
        match self.current_op {
            None => Self {
                display: self.display * 10.0 + d,
                ..self
            },
            Some(op) => Self {
                stack: self.display,
                display: d,
                stack_op: Some(op),
                current_op: None,
            },
        }
    }

    // `stack_op` is left in place, so a second Equals applies it again
    // with the previous result as the right-hand operand.
    fn equals(self) -> Self {
        match self.stack_op {
            None => self,
            Some(op) => Self {
                display: op.apply(self.stack, self.display),
                ..self
            },
        }
    }
}
