//! Calculator window

use chococore::safety::catch_or;
use chococore::theme::{ChocoColors, ChocoTheme};
use egui::{Context, Key, RichText};

use crate::accelerators::{Accelerators, NamedKey};
use crate::display::format_display;
use crate::engine::{Action, State};
use crate::keypad::{ButtonKind, Keypad, COLS, ROWS};
use crate::prefs::Preferences;

/// Outer padding around the display and grid
const PADDING: f32 = 20.0;
/// Gap between the display and the grid
const SECTION_GAP: f32 = 20.0;
/// Gap between buttons
const BUTTON_GAP: f32 = 7.0;

fn button_size(font_size: f32) -> egui::Vec2 {
    egui::vec2(font_size * 2.6, font_size * 2.2)
}

fn display_height(font_size: f32) -> f32 {
    font_size * 2.0
}

/// Inner window size that fits the display and grid exactly.
pub fn window_size(font_size: f32) -> [f32; 2] {
    let btn = button_size(font_size);
    let grid_w = btn.x * COLS as f32 + BUTTON_GAP * (COLS - 1) as f32;
    let grid_h = btn.y * ROWS as f32 + BUTTON_GAP * (ROWS - 1) as f32;
    [
        grid_w + PADDING * 2.0,
        grid_h + display_height(font_size) + SECTION_GAP + PADDING * 2.0,
    ]
}

fn named_key(key: Key) -> Option<NamedKey> {
    match key {
        Key::Enter => Some(NamedKey::Enter),
        Key::Escape => Some(NamedKey::Escape),
        Key::Backspace => Some(NamedKey::Backspace),
        _ => None,
    }
}

pub struct ChocoCalcApp {
    state: State,
    keypad: Keypad,
    accelerators: Accelerators,
    font_size: f32,
}

impl ChocoCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, prefs: &Preferences) -> Self {
        Self::from_prefs(prefs)
    }

    pub fn from_prefs(prefs: &Preferences) -> Self {
        let keypad = Keypad::new();
        let accelerators = Accelerators::new(&keypad).with_named_keys(prefs.named_keys);
        tracing::info!(accelerators = accelerators.len(), "calculator ready");
        Self {
            state: State::new(),
            keypad,
            accelerators,
            font_size: prefs.font_size,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    fn dispatch(&mut self, action: Action) {
        let next = self.state.apply(action);
        tracing::trace!(%action, before = ?self.state, after = ?next, "transition");
        self.state = next;
    }

    // Named keys are removed from the input so a focused keypad button
    // does not also treat Enter as a click this frame.
    fn handle_keys(&mut self, ctx: &Context) {
        let accelerators = &self.accelerators;
        let actions: Vec<Action> = ctx.input_mut(|i| {
            let mut actions = Vec::new();
            i.events.retain(|event| match event {
                egui::Event::Text(text) => {
                    actions.extend(accelerators.actions_for_text(text));
                    true
                }
                egui::Event::Key { key, pressed, .. } => {
                    match named_key(*key).and_then(|k| accelerators.lookup_named(k)) {
                        Some(action) => {
                            if *pressed {
                                actions.push(action);
                            }
                            false
                        }
                        None => true,
                    }
                }
                _ => true,
            });
            actions
        });

        for action in actions {
            self.dispatch(action);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let text = format_display(self.state.display());
        ChocoTheme::readout_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(display_height(self.font_size) - 8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(text)
                        .size(self.font_size)
                        .color(ChocoColors::BLACK),
                );
            });
        });
    }

    fn render_buttons(&self, ui: &mut egui::Ui) -> Option<Action> {
        let size = button_size(self.font_size);
        let mut clicked = None;

        egui::Grid::new("keypad")
            .spacing([BUTTON_GAP, BUTTON_GAP])
            .show(ui, |ui| {
                for row in self.keypad.rows() {
                    for button in row {
                        let fill = match button.kind() {
                            ButtonKind::Equals => ChocoColors::GHOST_WHITE,
                            _ => ChocoColors::BEIGE,
                        };
                        let label = RichText::new(button.label.to_string())
                            .size(self.font_size)
                            .color(ChocoColors::BLACK);
                        if ui.add_sized(size, egui::Button::new(label).fill(fill)).clicked() {
                            clicked = Some(button.action);
                        }
                    }
                    ui.end_row();
                }
            });

        clicked
    }

    /// Run one frame: keys first, then the display and grid.
    pub fn show(&mut self, ctx: &Context) {
        self.handle_keys(ctx);

        let panel_frame = ChocoTheme::default()
            .with_font_size(self.font_size)
            .panel_frame();

        let clicked = catch_or(None, || {
            egui::CentralPanel::default()
                .frame(panel_frame)
                .show(ctx, |ui| {
                    self.render_display(ui);
                    ui.add_space(SECTION_GAP - ui.spacing().item_spacing.y);
                    self.render_buttons(ui)
                })
                .inner
        });

        if let Some(action) = clicked {
            self.dispatch(action);
        }
    }
}

impl eframe::App for ChocoCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn frame(ctx: &Context, app: &mut ChocoCalcApp, events: Vec<egui::Event>) {
        let [w, h] = window_size(app.font_size);
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(w, h))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    fn shown(app: &ChocoCalcApp) -> String {
        format_display(app.state().display())
    }

    #[test]
    fn test_typed_text_reaches_engine() {
        let ctx = Context::default();
        let mut app = ChocoCalcApp::from_prefs(&Preferences::default());
        frame(&ctx, &mut app, vec![egui::Event::Text("12*3".into())]);
        frame(&ctx, &mut app, vec![egui::Event::Text("=".into())]);
        assert_eq!(shown(&app), "36");
    }

    #[test]
    fn test_enter_after_tab_focus_is_single_equals() {
        let ctx = Context::default();
        let mut app = ChocoCalcApp::from_prefs(&Preferences::default());
        frame(&ctx, &mut app, vec![egui::Event::Text("5+3".into())]);
        frame(&ctx, &mut app, vec![key(Key::Tab, true)]);
        frame(&ctx, &mut app, vec![key(Key::Tab, false)]);
        frame(&ctx, &mut app, vec![key(Key::Enter, true)]);
        frame(&ctx, &mut app, vec![key(Key::Enter, false)]);
        assert_eq!(shown(&app), "8");
        frame(&ctx, &mut app, vec![]);
        assert_eq!(shown(&app), "8");
    }

    #[test]
    fn test_enter_with_pending_operator_does_not_type_digit() {
        let ctx = Context::default();
        let mut app = ChocoCalcApp::from_prefs(&Preferences::default());
        frame(&ctx, &mut app, vec![egui::Event::Text("5+".into())]);
        frame(&ctx, &mut app, vec![key(Key::Tab, true), key(Key::Tab, false)]);
        frame(&ctx, &mut app, vec![key(Key::Enter, true), key(Key::Enter, false)]);
        let state = app.state();
        assert_eq!(shown(&app), "5");
        assert_eq!(state.stack_op(), None);
        assert_eq!(state.current_op(), Some(crate::engine::Operator::Add));
    }

    #[test]
    fn test_escape_clears_in_window() {
        let ctx = Context::default();
        let mut app = ChocoCalcApp::from_prefs(&Preferences::default());
        frame(&ctx, &mut app, vec![egui::Event::Text("42".into()), key(Key::Escape, true)]);
        assert_eq!(shown(&app), "0");
    }

    #[test]
    fn test_window_fits_grid() {
        let [w, h] = window_size(20.0);
        let btn = button_size(20.0);
        assert!(w > btn.x * 4.0 + PADDING * 2.0);
        assert!(h > btn.y * 4.0 + display_height(20.0));
    }

    #[test]
    fn test_window_grows_with_font() {
        let small = window_size(14.0);
        let large = window_size(28.0);
        assert!(large[0] > small[0]);
        assert!(large[1] > small[1]);
    }

    #[test]
    fn test_named_key_mapping() {
        assert_eq!(named_key(Key::Enter), Some(NamedKey::Enter));
        assert_eq!(named_key(Key::Escape), Some(NamedKey::Escape));
        assert_eq!(named_key(Key::Backspace), Some(NamedKey::Backspace));
        assert_eq!(named_key(Key::A), None);
    }
}
