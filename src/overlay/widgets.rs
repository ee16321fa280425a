//! Custom egui widgets for the HUD

use egui::{Color32, FontId, Rounding, Sense, Stroke, Vec2};

/// Visual style of the HUD panel
#[derive(Debug, Clone)]
pub struct HudStyle {
    /// Background tint (RGB); alpha comes from the session opacity
    pub background: [u8; 3],
    /// Text color (RGBA)
    pub text_color: Color32,
    /// Border radius
    pub corner_radius: f32,
    /// Hairline border
    pub border: Stroke,
    /// Horizontal content padding
    pub padding: f32,
    /// Height of the drag strip at the top
    pub header_height: f32,
}

impl Default for HudStyle {
    fn default() -> Self {
        Self {
            background: [28, 28, 32],
            text_color: Color32::from_rgb(242, 242, 247),
            corner_radius: 16.0,
            border: Stroke::new(0.5, Color32::from_white_alpha(51)),
            padding: 16.0,
            header_height: 32.0,
        }
    }
}

impl HudStyle {
    /// Background fill for the given opacity in [0, 1]
    pub fn background_fill(&self, opacity: f32) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// Three short bars marking the drag strip
pub fn drag_handle(ui: &egui::Ui, origin: egui::Pos2, color: Color32) {
    let stroke = Stroke::new(1.5, color);
    for row in 0..3 {
        let y = origin.y + row as f32 * 4.0;
        ui.painter()
            .line_segment([egui::pos2(origin.x, y), egui::pos2(origin.x + 12.0, y)], stroke);
    }
}

/// Small round translucent button that shrinks while pressed
pub fn glass_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    let size = Vec2::splat(26.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let pressed = response.is_pointer_button_down_on();
        let scale = if pressed { 0.9 } else { 1.0 };
        let alpha = if pressed { 204 } else { 255 };
        let fill = if response.hovered() {
            Color32::from_white_alpha(38)
        } else {
            Color32::from_white_alpha(26)
        };

        ui.painter()
            .circle_filled(rect.center(), rect.width() / 2.0 * scale, fill);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            FontId::proportional(12.0 * scale),
            Color32::from_white_alpha(alpha),
        );
    }

    response
}

/// Flat text button without background, used for the font size controls
pub fn plain_button(ui: &mut egui::Ui, label: &str, size: f32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(size))
            .frame(false)
            .rounding(Rounding::same(4.0)),
    )
}
