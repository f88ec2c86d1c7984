//! chococalc — a four-function desktop calculator
//!
//! The engine, keypad and accelerator map are plain data and functions;
//! `app` is the egui window on top of them.

pub mod accelerators;
pub mod app;
pub mod display;
pub mod driver;
pub mod engine;
pub mod keypad;
pub mod prefs;

pub use accelerators::{Accelerators, NamedKey};
pub use display::format_display;
pub use driver::{CalculatorDriver, HeadlessDriver};
pub use engine::{Action, Digit, Operator, State};
pub use keypad::Keypad;
pub use prefs::Preferences;
