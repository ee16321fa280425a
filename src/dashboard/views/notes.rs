//! My Notes view - the persisted note and the HUD state

use egui::RichText;

use crate::dashboard::components::{CardStatus, StatusCard};
use crate::dashboard::theme::ThemeColors;
use crate::overlay::PlatformSurface;
use crate::shared::{AppState, Intent, IntentSender};

/// Character and line counts of a note
pub fn note_stats(text: &str) -> (usize, usize) {
    let chars = text.chars().count();
    let lines = if text.is_empty() { 0 } else { text.lines().count() };
    (chars, lines)
}

/// Render the notes view
pub fn render_notes_view<S: PlatformSurface>(
    ui: &mut egui::Ui,
    state: &AppState<S>,
    intents: &IntentSender,
) {
    ui.heading(RichText::new("My Notes").strong());
    ui.add_space(4.0);
    ui.label(
        RichText::new("Your heads-up note. Edit it in the HUD; changes are saved as you type.")
            .color(ThemeColors::TEXT_SECONDARY),
    );
    ui.add_space(20.0);

    let (chars, lines) = note_stats(state.note_text());
    let hud_state = state.overlay.state();

    ui.horizontal(|ui| {
        StatusCard::new("HUD", hud_state.label(), CardStatus::from(hud_state)).show(ui);
        ui.add_space(12.0);
        StatusCard::new("Characters", chars.to_string(), CardStatus::Inactive).show(ui);
        ui.add_space(12.0);
        StatusCard::new("Lines", lines.to_string(), CardStatus::Inactive).show(ui);
    });

    ui.add_space(16.0);

    ui.horizontal(|ui| {
        let show = ui.add_enabled(!state.overlay.is_visible(), egui::Button::new("Show HUD"));
        if show.clicked() {
            intents.send(Intent::ShowHud);
        }
        let hide = ui.add_enabled(state.overlay.is_visible(), egui::Button::new("Hide HUD"));
        if hide.clicked() {
            intents.send(Intent::HideHud);
        }
    });

    ui.add_space(16.0);

    egui::Frame::none()
        .fill(ThemeColors::BG_CARD)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if state.note_text().is_empty() {
                        ui.label(
                            RichText::new("Nothing written yet.")
                                .italics()
                                .color(ThemeColors::TEXT_SECONDARY),
                        );
                    } else {
                        ui.label(RichText::new(state.note_text()).color(ThemeColors::TEXT_PRIMARY));
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_stats() {
        assert_eq!(note_stats(""), (0, 0));
        assert_eq!(note_stats("Q3 roadmap"), (10, 1));
        assert_eq!(note_stats("a\nb\nc\n"), (6, 3));
        assert_eq!(note_stats("héllo"), (5, 1));
    }
}
