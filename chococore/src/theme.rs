//! Chocolate theme
//!
//! Warm brown window, pale buttons, a bright aquamarine readout.
//! Square corners and 1px outlines, no shadows.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The palette every chocolate app draws from.
pub struct ChocoColors;

impl ChocoColors {
    pub const CHOCOLATE: Color32 = Color32::from_rgb(210, 105, 30);
    pub const AQUAMARINE: Color32 = Color32::from_rgb(127, 255, 212);
    pub const BEIGE: Color32 = Color32::from_rgb(245, 245, 220);
    pub const GHOST_WHITE: Color32 = Color32::from_rgb(248, 248, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for chocolate apps
pub struct ChocoTheme {
    pub font_size: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for ChocoTheme {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            window_padding: 20.0,
            item_spacing: 7.0,
        }
    }
}

impl ChocoTheme {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Apply the chocolate theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let small = (self.font_size * 0.7).max(8.0);
        style.text_styles = [
            (TextStyle::Small, FontId::new(small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size * 1.2, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = ChocoColors::CHOCOLATE;
        visuals.panel_fill = ChocoColors::CHOCOLATE;
        visuals.extreme_bg_color = ChocoColors::AQUAMARINE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, ChocoColors::BLACK);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        let pale = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = ChocoColors::BEIGE;
            ws.weak_bg_fill = ChocoColors::BEIGE;
            ws.bg_stroke = Stroke::new(1.0, ChocoColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, ChocoColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        pale(&mut visuals.widgets.inactive);
        pale(&mut visuals.widgets.hovered);
        pale(&mut visuals.widgets.active);
        pale(&mut visuals.widgets.open);

        // pressed buttons darken slightly so clicks are visible
        visuals.widgets.active.weak_bg_fill = ChocoColors::BEIGE.gamma_multiply(0.85);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, ChocoColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Frame for read-only value readouts: aquamarine fill, 1px black outline
    pub fn readout_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(ChocoColors::AQUAMARINE)
            .stroke(Stroke::new(1.0, ChocoColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }

    /// Frame for the central panel: chocolate fill with the theme padding
    pub fn panel_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(ChocoColors::CHOCOLATE)
            .inner_margin(egui::Margin::same(self.window_padding))
    }
}
