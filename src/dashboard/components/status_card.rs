//! Status card component for displaying status information

use egui::{Color32, RichText, Rounding, Vec2};

use crate::dashboard::theme::ThemeColors;
use crate::overlay::SurfaceState;

/// A card displaying a single value with a colored status dot
pub struct StatusCard {
    pub title: String,
    pub value: String,
    pub status: CardStatus,
}

/// Status types for cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardStatus {
    Active,
    Inactive,
    Warning,
}

impl CardStatus {
    pub fn color(&self) -> Color32 {
        match self {
            CardStatus::Active => ThemeColors::ACCENT_SUCCESS,
            CardStatus::Inactive => ThemeColors::TEXT_SECONDARY,
            CardStatus::Warning => ThemeColors::ACCENT_WARNING,
        }
    }
}

impl From<SurfaceState> for CardStatus {
    fn from(state: SurfaceState) -> Self {
        match state {
            SurfaceState::Visible => CardStatus::Active,
            SurfaceState::Hidden => CardStatus::Warning,
            SurfaceState::Absent => CardStatus::Inactive,
        }
    }
}

impl StatusCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>, status: CardStatus) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            status,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(ThemeColors::BG_CARD)
            .rounding(Rounding::same(10.0))
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.set_min_width(150.0);

                ui.horizontal(|ui| {
                    let dot = ui.cursor().left_top() + Vec2::new(4.0, 9.0);
                    ui.painter().circle_filled(dot, 4.0, self.status.color());
                    ui.add_space(14.0);

                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&self.title)
                                .size(11.0)
                                .color(ThemeColors::TEXT_SECONDARY),
                        );
                        ui.add_space(2.0);
                        ui.label(
                            RichText::new(&self.value)
                                .size(17.0)
                                .color(ThemeColors::TEXT_PRIMARY)
                                .strong(),
                        );
                    });
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_surface_state() {
        assert_eq!(CardStatus::from(SurfaceState::Visible), CardStatus::Active);
        assert_eq!(CardStatus::from(SurfaceState::Hidden), CardStatus::Warning);
        assert_eq!(CardStatus::from(SurfaceState::Absent), CardStatus::Inactive);
    }
}
