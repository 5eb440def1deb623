//! Pink/purple light palette of the app.

use shared::domain::Accent;

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(219, 39, 119);
pub const SECONDARY: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(253, 242, 248);
pub const CARD: egui::Color32 = egui::Color32::WHITE;
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(243, 224, 236);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(113, 113, 122);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(240, 253, 244);
pub const SUCCESS_STROKE: egui::Color32 = egui::Color32::from_rgb(187, 247, 208);
pub const CARD_RADIUS: u8 = 12;

pub fn accent_color(accent: Accent) -> egui::Color32 {
    match accent {
        Accent::Primary => PRIMARY,
        Accent::Secondary => SECONDARY,
    }
}

/// Mixes `c` towards white by `t` in `0.0..=1.0`.
pub fn tint(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgb(mix(c.r()), mix(c.g()), mix(c.b()))
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    let radius = egui::CornerRadius::same(CARD_RADIUS);

    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = CARD;
    visuals.extreme_bg_color = CARD;
    visuals.faint_bg_color = tint(PRIMARY, 0.94);
    visuals.hyperlink_color = PRIMARY;
    visuals.selection.bg_fill = tint(PRIMARY, 0.35);
    visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);
    visuals.window_corner_radius = radius;
    visuals.menu_corner_radius = radius;

    visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.active.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.inactive.weak_bg_fill = tint(PRIMARY, 0.9);
    visuals.widgets.hovered.weak_bg_fill = tint(PRIMARY, 0.8);
    visuals.widgets.active.weak_bg_fill = tint(PRIMARY, 0.7);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, PRIMARY);

    visuals
}

pub fn install(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
    });
}
