//! HUD contents: drag strip, note editor and hover controls
//!
//! Rendering reads state and emits intents; it never mutates state itself.

use egui::{Color32, FontId, Frame, Margin, ScrollArea, Sense, Slider, TextEdit, ViewportCommand};

use super::note::{NoteSession, MAX_OPACITY, MIN_OPACITY};
use super::widgets::{drag_handle, glass_button, plain_button, HudStyle};
use crate::shared::{Intent, IntentSender};

const CONTROLS_HEIGHT: f32 = 44.0;

/// Render the HUD into its viewport
pub fn render_hud(
    ctx: &egui::Context,
    session: &NoteSession,
    note_text: &str,
    intents: &IntentSender,
) {
    // The close box hides the HUD; it is never destroyed
    if ctx.input(|i| i.viewport().close_requested()) {
        ctx.send_viewport_cmd(ViewportCommand::CancelClose);
        intents.send(Intent::HideHud);
    }

    let hovering = ctx.input(|i| i.pointer.has_pointer());
    if hovering != session.hovering() {
        intents.send(Intent::HoverHud(hovering));
    }

    let style = HudStyle::default();

    egui::CentralPanel::default()
        .frame(Frame::none().fill(Color32::TRANSPARENT))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            ui.painter().rect(
                rect.shrink(1.0),
                style.corner_radius,
                style.background_fill(session.opacity()),
                style.border,
            );

            let header = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(rect.width(), style.header_height),
            );
            let drag = ui.interact(header, ui.id().with("hud_drag"), Sense::drag());
            if drag.drag_started() {
                ctx.send_viewport_cmd(ViewportCommand::StartDrag);
            }
            if session.hovering() {
                drag_handle(
                    ui,
                    header.left_top() + egui::vec2(style.padding, 12.0),
                    Color32::from_white_alpha(160),
                );
            }

            Frame::none()
                .inner_margin(Margin {
                    left: style.padding,
                    right: style.padding,
                    top: style.header_height,
                    bottom: 8.0,
                })
                .show(ui, |ui| {
                    let reserved = if session.hovering() { CONTROLS_HEIGHT } else { 0.0 };
                    let editor_height = (ui.available_height() - reserved).max(0.0);

                    ScrollArea::vertical()
                        .max_height(editor_height)
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            let mut draft = note_text.to_owned();
                            let response = ui.add(
                                TextEdit::multiline(&mut draft)
                                    .font(FontId::proportional(session.font_size()))
                                    .text_color(style.text_color)
                                    .frame(false)
                                    .desired_width(f32::INFINITY)
                                    .desired_rows(4),
                            );
                            if response.changed() {
                                intents.send(Intent::EditNote(draft));
                            }
                        });

                    if session.hovering() {
                        render_controls(ui, session, intents);
                    }
                });
        });
}

/// Opacity slider, font size buttons and the hide button
fn render_controls(ui: &mut egui::Ui, session: &NoteSession, intents: &IntentSender) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().slider_width = 80.0;

        ui.label(egui::RichText::new("Opacity").size(10.0).color(Color32::from_white_alpha(204)));
        let mut opacity = session.opacity();
        if ui
            .add(Slider::new(&mut opacity, MIN_OPACITY..=MAX_OPACITY).show_value(false))
            .changed()
        {
            intents.send(Intent::SetOpacity(opacity));
        }

        ui.add_space(12.0);

        if plain_button(ui, "A-", 12.0).on_hover_text("Smaller text").clicked() {
            intents.send(Intent::DecreaseFontSize);
        }
        if plain_button(ui, "A+", 14.0).on_hover_text("Larger text").clicked() {
            intents.send(Intent::IncreaseFontSize);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if glass_button(ui, "–").on_hover_text("Hide").clicked() {
                intents.send(Intent::HideHud);
            }
        });
    });
}
