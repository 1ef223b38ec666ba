//! Colors and font setup

use eframe::egui::{self, Color32};

pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 140, 150);
pub const SUCCESS: Color32 = Color32::from_rgb(80, 200, 120);
pub const ERROR: Color32 = Color32::from_rgb(230, 90, 90);

/// Install the icon font and base spacing
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });
}
