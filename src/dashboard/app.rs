//! Dashboard application entry point

use eframe::egui;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::DashboardSettings;
use crate::dashboard::components::render_sidebar;
use crate::dashboard::state::{DashboardState, DashboardView};
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::{render_home_view, render_notes_view, render_settings_view};
use crate::hotkey::HotkeyManager;
use crate::overlay::{render_hud, ViewportSurface};
use crate::shared::{AppState, Intent, IntentBus};

/// How often to poll for global hotkey presses while otherwise idle
const HOTKEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main dashboard application
pub struct DashboardApp {
    /// Application state, including the HUD controller
    state: AppState<ViewportSurface>,
    /// Dashboard-specific widget state
    dashboard_state: DashboardState,
    /// Intents emitted by views this frame
    bus: IntentBus,
    /// Global toggle hotkey, if one could be registered
    hotkeys: Option<HotkeyManager>,
    /// Whether theme has been applied
    theme_applied: bool,
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(state: AppState<ViewportSurface>) -> Self {
        let hotkeys = state
            .config
            .overlay
            .hotkey()
            .and_then(|hotkey| match register_hotkey(hotkey) {
                Ok(manager) => Some(manager),
                Err(e) => {
                    warn!("HUD hotkey unavailable: {}", e);
                    None
                }
            });

        Self {
            state,
            dashboard_state: DashboardState::default(),
            bus: IntentBus::new(),
            hotkeys,
            theme_applied: false,
        }
    }

    /// Create eframe options for the dashboard window
    pub fn options(settings: &DashboardSettings) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([settings.size.0, settings.size.1])
                .with_min_inner_size([settings.min_size.0, settings.min_size.1])
                .with_title("Dupely")
                .with_title_shown(false)
                .with_titlebar_shown(false)
                .with_fullsize_content_view(true),
            ..Default::default()
        }
    }

    /// Render the HUD viewport once it exists. Hidden HUDs keep their window.
    fn show_hud(&mut self, ctx: &egui::Context) {
        let surface = self.state.overlay.surface();
        let Some(builder) = surface.builder() else {
            return;
        };
        let viewport_id = surface.id();

        let visible = self.state.overlay.is_visible();
        let session = self.state.overlay.session().copied().unwrap_or_default();
        let note_text = self.state.note_text();
        let intents = self.bus.sender();

        ctx.show_viewport_immediate(viewport_id, builder, |ctx, _class| {
            if visible {
                render_hud(ctx, &session, note_text, &intents);
            }
        });

        self.state.overlay.surface_mut().after_frame();
    }

    /// Apply every intent emitted this frame
    fn apply_intents(&mut self, ctx: &egui::Context) {
        let intents = self.bus.drain();
        if intents.is_empty() {
            return;
        }

        for intent in intents {
            self.state.apply(intent);
        }

        if self.state.runtime.quit_requested {
            info!("Closing dashboard");
            ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
        }

        ctx.request_repaint();
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        if let Some(hotkeys) = &self.hotkeys {
            if hotkeys.poll_events() {
                self.bus.sender().send(Intent::ToggleHud);
            }
            ctx.request_repaint_after(HOTKEY_POLL_INTERVAL);
        }

        let intents = self.bus.sender();

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(200.0)
            .frame(egui::Frame::none().fill(ThemeColors::BG_SIDEBAR))
            .show(ctx, |ui| {
                render_sidebar(
                    ui,
                    &self.state.config.profile,
                    self.state.current_view,
                    &intents,
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none().inner_margin(40.0).show(ui, |ui| {
                match self.state.current_view {
                    DashboardView::Home => render_home_view(ui, &self.state, &intents),
                    DashboardView::Notes => render_notes_view(ui, &self.state, &intents),
                    DashboardView::Settings => render_settings_view(
                        ui,
                        &mut self.dashboard_state.settings,
                        &self.state,
                        &intents,
                    ),
                }
            });
        });

        self.show_hud(ctx);
        self.apply_intents(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // The HUD window is transparent; panels paint the dashboard background
        [0.0, 0.0, 0.0, 0.0]
    }
}

fn register_hotkey(hotkey: &str) -> anyhow::Result<HotkeyManager> {
    let mut manager = HotkeyManager::new()?;
    manager.register_toggle_hotkey(hotkey)?;
    Ok(manager)
}

/// Run the dashboard application (blocking)
pub fn run_dashboard(state: AppState<ViewportSurface>) -> Result<(), eframe::Error> {
    let options = DashboardApp::options(&state.config.dashboard);
    let app = DashboardApp::new(state);
    eframe::run_native(
        "Dupely",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
