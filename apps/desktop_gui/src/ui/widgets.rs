//! Small building blocks shared by the screens.

use shared::domain::Screen;

use crate::ui::theme;

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::CARD)
        .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(theme::CARD_RADIUS as f32)
        .inner_margin(egui::Margin::same(16))
}

pub fn card<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui)
        })
        .inner
}

/// Rounded square with a glyph in the middle.
pub fn icon_tile(ui: &mut egui::Ui, icon: &str, fill: egui::Color32, side: f32, round: bool) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let painter = ui.painter();
    if round {
        painter.circle_filled(rect.center(), side / 2.0, fill);
    } else {
        painter.rect_filled(rect, egui::CornerRadius::same(16), fill);
    }
    let glyph_color = if is_light(fill) {
        theme::PRIMARY
    } else {
        egui::Color32::WHITE
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(side * 0.45),
        glyph_color,
    );
}

fn is_light(c: egui::Color32) -> bool {
    let luma = 0.299 * c.r() as f32 + 0.587 * c.g() as f32 + 0.114 * c.b() as f32;
    luma > 186.0
}

pub fn badge(ui: &mut egui::Ui, text: impl Into<String>, fill: egui::Color32, outline: bool) {
    let (fill, stroke, color) = if outline {
        (
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(1.0, theme::CARD_STROKE),
            theme::MUTED_TEXT,
        )
    } else {
        (fill, egui::Stroke::NONE, egui::Color32::WHITE)
    };
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text.into()).small().strong().color(color));
        });
}

pub fn muted(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text.into()).color(theme::MUTED_TEXT)
}

pub fn screen_heading(ui: &mut egui::Ui, screen: Screen) {
    ui.label(egui::RichText::new(screen.heading()).size(24.0).strong());
    ui.label(muted(screen.subheading()));
    ui.add_space(8.0);
}

pub fn primary_button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.into())
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(theme::PRIMARY)
    .min_size(egui::vec2(0.0, 36.0))
}

pub fn outline_button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).strong())
        .fill(theme::CARD)
        .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
        .min_size(egui::vec2(0.0, 36.0))
}

pub fn full_width(ui: &mut egui::Ui, button: egui::Button<'static>) -> egui::Response {
    ui.add_sized([ui.available_width(), 40.0], button)
}

/// Large number with a caption under it.
pub fn big_counter(ui: &mut egui::Ui, value: u64, caption: &str) {
    ui.label(egui::RichText::new(value.to_string()).size(48.0).strong());
    ui.label(muted(caption));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_fills_get_dark_glyphs() {
        assert!(is_light(egui::Color32::WHITE));
        assert!(is_light(theme::tint(theme::SECONDARY, 0.9)));
        assert!(!is_light(theme::PRIMARY));
        assert!(!is_light(theme::SECONDARY));
    }
}
