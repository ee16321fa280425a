//! Dashboard views

pub mod home;
pub mod notes;
pub mod settings;

pub use home::render_home_view;
pub use notes::render_notes_view;
pub use settings::render_settings_view;

use egui::RichText;

use crate::dashboard::theme::{color_with_alpha, ThemeColors};

/// Banner for the last error, shared by every page
pub(crate) fn error_banner(ui: &mut egui::Ui, error: &str) {
    egui::Frame::none()
        .fill(color_with_alpha(ThemeColors::ACCENT_ERROR, 51))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Error:").color(ThemeColors::ACCENT_ERROR).strong());
                ui.label(RichText::new(error).color(ThemeColors::TEXT_PRIMARY));
            });
        });
}
