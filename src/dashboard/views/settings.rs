//! Settings view - profile editing and file locations

use egui::RichText;
use std::path::Path;

use crate::dashboard::state::SettingsViewState;
use crate::dashboard::theme::ThemeColors;
use crate::dashboard::views::error_banner;
use crate::overlay::PlatformSurface;
use crate::shared::{AppState, Intent, IntentSender};

/// Render the settings view
pub fn render_settings_view<S: PlatformSurface>(
    ui: &mut egui::Ui,
    view_state: &mut SettingsViewState,
    state: &AppState<S>,
    intents: &IntentSender,
) {
    ui.heading(RichText::new("Settings").strong());
    ui.add_space(4.0);
    ui.label(
        RichText::new("Profile and application details")
            .color(ThemeColors::TEXT_SECONDARY),
    );
    ui.add_space(20.0);

    let saved = &state.config.profile;

    section(ui, "Profile", |ui| {
        let draft = view_state.draft_mut(saved);
        egui::Grid::new("profile_settings")
            .num_columns(2)
            .spacing([24.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut draft.user_name).desired_width(260.0));
                ui.end_row();

                ui.label("Bio:");
                ui.add(egui::TextEdit::singleline(&mut draft.user_bio).desired_width(260.0));
                ui.end_row();
            });

        ui.add_space(10.0);
        let dirty = view_state.is_dirty(saved);
        ui.horizontal(|ui| {
            if ui.add_enabled(dirty, egui::Button::new("Save")).clicked() {
                if let Some(draft) = view_state.profile_draft.clone() {
                    intents.send(Intent::SaveProfile(draft));
                }
            }
            if ui.add_enabled(dirty, egui::Button::new("Revert")).clicked() {
                view_state.profile_draft = Some(saved.clone());
            }
            // A pending edit makes the last save notice stale
            if let Some(notice) = state.runtime.notice.as_ref().filter(|_| !dirty) {
                ui.label(RichText::new(notice).size(12.0).color(ThemeColors::ACCENT_SUCCESS));
            }
        });
    });

    ui.add_space(16.0);

    section(ui, "Application", |ui| {
        egui::Grid::new("app_info")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label(RichText::new("HUD hotkey:").color(ThemeColors::TEXT_SECONDARY));
                ui.label(state.config.overlay.hotkey().unwrap_or("Disabled"));
                ui.end_row();

                ui.label(RichText::new("Log level:").color(ThemeColors::TEXT_SECONDARY));
                ui.label(&state.config.general.log_level);
                ui.end_row();

                ui.label(RichText::new("Config file:").color(ThemeColors::TEXT_SECONDARY));
                ui.label(display_path(state.paths.config_file.as_deref()));
                ui.end_row();

                ui.label(RichText::new("Note storage:").color(ThemeColors::TEXT_SECONDARY));
                ui.label(display_path(state.paths.database.as_deref()));
                ui.end_row();

                ui.label(RichText::new("Version:").color(ThemeColors::TEXT_SECONDARY));
                ui.label(env!("CARGO_PKG_VERSION"));
                ui.end_row();
            });
        ui.add_space(6.0);
        ui.label(
            RichText::new("Hotkey and log level changes in the config file apply on next launch.")
                .size(11.0)
                .color(ThemeColors::TEXT_SECONDARY),
        );
    });

    if let Some(error) = &state.runtime.last_error {
        ui.add_space(16.0);
        error_banner(ui, error);
    }
}

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ThemeColors::BG_CARD)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).size(16.0).strong());
            ui.add_space(10.0);
            add_contents(ui);
        });
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "In memory (not saved)".to_string())
}
