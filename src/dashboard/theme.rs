//! Dashboard theme and styling
//!
//! Neutral dark palette with a single blue accent.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Dashboard color palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_SIDEBAR: Color32 = Color32::from_rgb(30, 30, 32);
    pub const BG_CONTENT: Color32 = Color32::from_rgb(38, 38, 41);
    pub const BG_CARD: Color32 = Color32::from_rgb(48, 48, 52);
    pub const BG_HOVER: Color32 = Color32::from_rgb(58, 58, 63);

    // Accent colors
    pub const ACCENT: Color32 = Color32::from_rgb(10, 132, 255);
    pub const ACCENT_SUCCESS: Color32 = Color32::from_rgb(48, 209, 88);
    pub const ACCENT_WARNING: Color32 = Color32::from_rgb(255, 159, 10);
    pub const ACCENT_ERROR: Color32 = Color32::from_rgb(255, 69, 58);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(242, 242, 247);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(152, 152, 157);

    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 67);
}

/// Apply the dashboard theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = Visuals::dark();

    visuals.window_fill = ThemeColors::BG_CONTENT;
    visuals.panel_fill = ThemeColors::BG_CONTENT;
    visuals.faint_bg_color = ThemeColors::BG_CARD;
    visuals.extreme_bg_color = ThemeColors::BG_SIDEBAR;

    let rounding = Rounding::same(8.0);
    for (widget, fill) in [
        (&mut visuals.widgets.noninteractive, ThemeColors::BG_CONTENT),
        (&mut visuals.widgets.inactive, ThemeColors::BG_CARD),
        (&mut visuals.widgets.hovered, ThemeColors::BG_HOVER),
        (&mut visuals.widgets.active, ThemeColors::ACCENT),
        (&mut visuals.widgets.open, ThemeColors::BG_HOVER),
    ] {
        widget.bg_fill = fill;
        widget.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
        widget.rounding = rounding;
    }
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_SECONDARY);

    visuals.selection.bg_fill = color_with_alpha(ThemeColors::ACCENT, 77);
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::ACCENT);
    visuals.hyperlink_color = ThemeColors::ACCENT;
    visuals.window_rounding = Rounding::same(12.0);
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(28.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
