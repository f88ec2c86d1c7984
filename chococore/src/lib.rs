//! chococore — shared library for chocolate desktop applications

pub mod logging;
pub mod safety;
pub mod storage;
pub mod theme;

pub use theme::ChocoTheme;

/// Get the initial window position from an environment variable.
/// Reads `CHOCO_WINDOW_POS` formatted as `x,y`.
/// Returns `None` if unset or malformed, leaving placement to the window manager.
pub fn initial_position() -> Option<egui::Pos2> {
    std::env::var("CHOCO_WINDOW_POS")
        .ok()
        .and_then(|s| parse_position(&s))
}

fn parse_position(s: &str) -> Option<egui::Pos2> {
    let (x, y) = s.split_once(',')?;
    let x = x.trim().parse::<f32>().ok()?;
    let y = y.trim().parse::<f32>().ok()?;
    Some(egui::Pos2::new(x, y))
}
