//! Sidebar navigation component

use egui::{Color32, RichText, Rounding, Sense, Vec2};

use crate::config::ProfileConfig;
use crate::dashboard::state::DashboardView;
use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::shared::{Intent, IntentSender};

/// Render the sidebar: profile header, navigation and the quit button
pub fn render_sidebar(
    ui: &mut egui::Ui,
    profile: &ProfileConfig,
    current_view: DashboardView,
    intents: &IntentSender,
) {
    ui.vertical(|ui| {
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            ui.add_space(12.0);
            avatar(ui, profile.first_name());
            ui.add_space(4.0);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&profile.user_name)
                        .size(14.0)
                        .color(ThemeColors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.label(
                    RichText::new("Pro Member")
                        .size(11.0)
                        .color(ThemeColors::TEXT_SECONDARY),
                );
            });
        });

        ui.add_space(28.0);

        for view in DashboardView::ALL {
            if nav_button(ui, view.icon(), view.name(), current_view == view) {
                intents.send(Intent::SelectView(view));
            }
            ui.add_space(4.0);
        }

        // Quit sits at the bottom
        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(20.0);
            ui.horizontal(|ui| {
                ui.add_space(16.0);
                let quit = egui::Button::new(
                    RichText::new("Quit Dupely")
                        .color(color_with_alpha(ThemeColors::ACCENT_ERROR, 204)),
                )
                .frame(false);
                if ui.add(quit).clicked() {
                    intents.send(Intent::Quit);
                }
            });
        });
    });
}

/// Round avatar with the user's initial
fn avatar(ui: &mut egui::Ui, first_name: &str) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(40.0), Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 20.0, ThemeColors::ACCENT);

    let initial = first_name.chars().next().map(|c| c.to_uppercase().to_string());
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial.as_deref().unwrap_or("?"),
        egui::FontId::proportional(18.0),
        Color32::WHITE,
    );
}

/// Render a navigation button
fn nav_button(ui: &mut egui::Ui, icon: &str, label: &str, is_selected: bool) -> bool {
    let desired_size = Vec2::new(ui.available_width() - 16.0, 34.0);
    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if is_selected {
            color_with_alpha(ThemeColors::ACCENT, 26)
        } else if response.hovered() {
            ThemeColors::BG_HOVER
        } else {
            Color32::TRANSPARENT
        };

        let text_color = if is_selected {
            ThemeColors::ACCENT
        } else {
            ThemeColors::TEXT_PRIMARY
        };

        ui.painter().rect_filled(
            rect.shrink2(Vec2::new(8.0, 0.0)),
            Rounding::same(8.0),
            bg_color,
        );

        ui.painter().text(
            rect.left_center() + Vec2::new(24.0, 0.0),
            egui::Align2::LEFT_CENTER,
            icon,
            egui::FontId::proportional(13.0),
            text_color,
        );
        ui.painter().text(
            rect.left_center() + Vec2::new(48.0, 0.0),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(14.0),
            text_color,
        );
    }

    response.clicked()
}
