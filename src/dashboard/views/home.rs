//! Home view - greeting and the Toggle HUD card

use egui::{Color32, RichText, Rounding, Sense, Vec2};

use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::dashboard::views::error_banner;
use crate::overlay::PlatformSurface;
use crate::shared::{AppState, Intent, IntentSender};

const CARD_HEIGHT: f32 = 84.0;

/// Render the home view
pub fn render_home_view<S: PlatformSurface>(
    ui: &mut egui::Ui,
    state: &AppState<S>,
    intents: &IntentSender,
) {
    let profile = &state.config.profile;

    ui.label(
        RichText::new(format!("Welcome back, {}", profile.first_name()))
            .size(28.0)
            .strong()
            .color(ThemeColors::TEXT_PRIMARY),
    );
    ui.add_space(8.0);
    ui.label(RichText::new(&profile.user_bio).color(ThemeColors::TEXT_SECONDARY));

    // Center the card vertically in the remaining space
    let free = ui.available_height() - CARD_HEIGHT;
    ui.add_space((free / 2.0).max(24.0));

    if toggle_hud_card(ui).clicked() {
        intents.send(Intent::ToggleHud);
    }

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("HUD: {}", state.overlay.state().label()))
                .size(12.0)
                .color(ThemeColors::TEXT_SECONDARY),
        );
    });

    if let Some(error) = &state.runtime.last_error {
        ui.add_space(16.0);
        error_banner(ui, error);
    }
}

/// The large blue button that toggles the HUD
fn toggle_hud_card(ui: &mut egui::Ui) -> egui::Response {
    let size = Vec2::new(ui.available_width(), CARD_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = if response.is_pointer_button_down_on() {
            color_with_alpha(ThemeColors::ACCENT, 204)
        } else {
            ThemeColors::ACCENT
        };
        let painter = ui.painter();

        // Drop shadow
        painter.rect_filled(
            rect.translate(Vec2::new(0.0, 3.0)),
            Rounding::same(12.0),
            Color32::from_black_alpha(60),
        );
        painter.rect_filled(rect, Rounding::same(12.0), fill);

        // Window-over-window glyph
        let glyph = egui::Rect::from_center_size(
            rect.left_center() + Vec2::new(40.0, 0.0),
            Vec2::new(26.0, 20.0),
        );
        let stroke = egui::Stroke::new(1.5, Color32::WHITE);
        painter.rect_stroke(glyph.translate(Vec2::new(-3.0, 3.0)), Rounding::same(3.0), stroke);
        painter.rect_filled(glyph.translate(Vec2::new(3.0, -3.0)), Rounding::same(3.0), fill);
        painter.rect_stroke(glyph.translate(Vec2::new(3.0, -3.0)), Rounding::same(3.0), stroke);

        painter.text(
            rect.left_center() + Vec2::new(72.0, -10.0),
            egui::Align2::LEFT_CENTER,
            "Toggle HUD",
            egui::FontId::proportional(17.0),
            Color32::WHITE,
        );
        painter.text(
            rect.left_center() + Vec2::new(72.0, 12.0),
            egui::Align2::LEFT_CENTER,
            "Heads-up notes for your meetings",
            egui::FontId::proportional(13.0),
            Color32::from_white_alpha(178),
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::overlay::surface::testing::RecordingSurface;
    use crate::shared::{AppPaths, IntentBus};
    use crate::storage::{NoteStore, PreferenceStore};
    use egui::epaint::{ClippedShape, Shape};

    fn painted_text(shapes: &[ClippedShape]) -> Vec<String> {
        fn collect(shape: &Shape, out: &mut Vec<String>) {
            match shape {
                Shape::Text(text) => out.push(text.galley.text().to_string()),
                Shape::Vec(shapes) => shapes.iter().for_each(|s| collect(s, out)),
                _ => {}
            }
        }

        let mut out = Vec::new();
        for clipped in shapes {
            collect(&clipped.shape, &mut out);
        }
        out
    }

    #[test]
    fn test_card_title_is_toggle_while_hud_visible() {
        let notes = NoteStore::new(PreferenceStore::open_in_memory().unwrap());
        let mut state = AppState::new(
            AppConfig::default(),
            AppPaths::default(),
            RecordingSurface::default(),
            notes,
        );
        state.apply(Intent::ToggleHud);
        assert!(state.overlay.is_visible());

        let bus = IntentBus::new();
        let sender = bus.sender();
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| render_home_view(ui, &state, &sender));
        });

        let text = painted_text(&output.shapes);
        assert!(text.iter().any(|t| t == "Toggle HUD"));
        assert!(!text.iter().any(|t| t == "Hide HUD"));
    }
}
