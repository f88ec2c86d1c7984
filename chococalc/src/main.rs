//! chococalc - a four-function calculator
//!
//! Digits, + - * /, clear and equals. Keys type their button labels.

use chococalc::app::{window_size, ChocoCalcApp};
use chococalc::Preferences;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    chococore::logging::init("chococalc");

    let prefs = Preferences::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(window_size(prefs.font_size))
        .with_resizable(false)
        .with_maximize_button(false)
        .with_title("Calc");
    if prefs.always_on_top {
        viewport = viewport.with_window_level(egui::viewport::WindowLevel::AlwaysOnTop);
    }
    if let Some(pos) = chococore::initial_position() {
        viewport = viewport.with_position(pos);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Calc",
        options,
        Box::new(move |cc| {
            chococore::ChocoTheme::default()
                .with_font_size(prefs.font_size)
                .apply(&cc.egui_ctx);
            Box::new(ChocoCalcApp::new(cc, &prefs))
        }),
    )
}
