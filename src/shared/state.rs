//! Application state and the intent reducer

use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::config::{self, AppConfig};
use crate::dashboard::state::DashboardView;
use crate::overlay::{OverlayController, PlatformSurface};
use crate::shared::messages::Intent;
use crate::storage::NoteStore;

/// Where the app keeps its files, when known
#[derive(Debug, Clone, Default)]
pub struct AppPaths {
    pub config_file: Option<PathBuf>,
    pub database: Option<PathBuf>,
}

/// Everything the dashboard and the HUD render from
pub struct AppState<S: PlatformSurface> {
    /// Application configuration
    pub config: AppConfig,
    /// File locations
    pub paths: AppPaths,
    /// The single HUD surface
    pub overlay: OverlayController<S>,
    /// Page shown in the dashboard
    pub current_view: DashboardView,
    /// Runtime state (not persisted)
    pub runtime: RuntimeState,
    notes: NoteStore,
    note_text: String,
}

impl<S: PlatformSurface> AppState<S> {
    /// Build the state, loading the persisted note
    pub fn new(config: AppConfig, paths: AppPaths, surface: S, notes: NoteStore) -> Self {
        let note_text = notes.load();
        Self {
            config,
            paths,
            overlay: OverlayController::new(surface),
            current_view: DashboardView::default(),
            runtime: RuntimeState::default(),
            notes,
            note_text,
        }
    }

    pub fn note_text(&self) -> &str {
        &self.note_text
    }

    /// Replace the note text and persist it
    pub fn set_note_text(&mut self, text: String) {
        if text == self.note_text {
            return;
        }
        self.notes.save(&text);
        self.note_text = text;
    }

    /// Apply one user intent
    pub fn apply(&mut self, intent: Intent) {
        debug!("Applying intent: {:?}", intent);

        match intent {
            Intent::ToggleHud => {
                if let Err(e) = self.overlay.toggle() {
                    self.report_error(e.to_string());
                }
            }
            Intent::ShowHud => {
                if let Err(e) = self.overlay.show() {
                    self.report_error(e.to_string());
                }
            }
            Intent::HideHud => self.overlay.hide(),
            Intent::EditNote(text) => self.set_note_text(text),
            Intent::SetOpacity(opacity) => {
                if let Some(session) = self.overlay.session_mut() {
                    session.set_opacity(opacity);
                }
            }
            Intent::IncreaseFontSize => {
                if let Some(session) = self.overlay.session_mut() {
                    session.increase_font_size();
                }
            }
            Intent::DecreaseFontSize => {
                if let Some(session) = self.overlay.session_mut() {
                    session.decrease_font_size();
                }
            }
            Intent::HoverHud(hovering) => {
                if let Some(session) = self.overlay.session_mut() {
                    session.set_hovering(hovering);
                }
            }
            Intent::SelectView(view) => {
                self.current_view = view;
                self.runtime.notice = None;
            }
            Intent::SaveProfile(profile) => {
                self.config.profile = profile;
                self.save_config();
            }
            Intent::Quit => {
                info!("Quit requested");
                self.runtime.quit_requested = true;
            }
        }
    }

    fn save_config(&mut self) {
        let Some(path) = self.paths.config_file.clone() else {
            self.report_error("No configuration file location is available");
            return;
        };

        match config::save_config(&self.config, &path) {
            Ok(()) => {
                info!("Saved configuration to {:?}", path);
                self.runtime.clear_error();
                self.runtime.notice = Some("Profile saved".to_string());
            }
            Err(e) => self.report_error(format!("Failed to save configuration: {}", e)),
        }
    }

    fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.runtime.set_error(message);
    }
}

/// Runtime state that is not persisted
#[derive(Debug, Clone, Default)]
pub struct RuntimeState {
    /// Last error message (if any)
    pub last_error: Option<String>,
    /// Last informational message (if any)
    pub notice: Option<String>,
    /// Set once the user asked to quit
    pub quit_requested: bool,
}

impl RuntimeState {
    /// Clear any error state
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use crate::overlay::surface::testing::{RecordingSurface, SurfaceCall};
    use crate::overlay::SurfaceState;
    use crate::storage::PreferenceStore;

    fn state_with(surface: RecordingSurface) -> AppState<RecordingSurface> {
        let notes = NoteStore::new(PreferenceStore::open_in_memory().unwrap());
        AppState::new(AppConfig::default(), AppPaths::default(), surface, notes)
    }

    fn state() -> AppState<RecordingSurface> {
        state_with(RecordingSurface::default())
    }

    #[test]
    fn test_note_text_survives_hide_and_show() {
        let mut state = state();
        state.apply(Intent::ShowHud);
        state.apply(Intent::EditNote("Q3 roadmap".to_string()));

        state.apply(Intent::HideHud);
        assert_eq!(state.overlay.state(), SurfaceState::Hidden);

        state.apply(Intent::ShowHud);
        assert_eq!(state.note_text(), "Q3 roadmap");
        assert!(state.overlay.is_visible());
    }

    #[test]
    fn test_toggle_scenario_keeps_text() {
        let mut state = state();

        state.apply(Intent::ToggleHud);
        assert!(state.overlay.is_visible());
        state.apply(Intent::EditNote("agenda".to_string()));

        state.apply(Intent::ToggleHud);
        assert!(state.overlay.exists());
        assert!(!state.overlay.is_visible());

        state.apply(Intent::ToggleHud);
        assert!(state.overlay.is_visible());
        assert_eq!(state.note_text(), "agenda");
        assert_eq!(state.overlay.surface().count(SurfaceCall::Create), 1);
    }

    #[test]
    fn test_note_is_persisted_on_edit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.db");

        {
            let notes = NoteStore::new(PreferenceStore::open(&path).unwrap());
            let mut state = AppState::new(
                AppConfig::default(),
                AppPaths::default(),
                RecordingSurface::default(),
                notes,
            );
            state.apply(Intent::EditNote("remember the demo".to_string()));
        }

        let notes = NoteStore::new(PreferenceStore::open(&path).unwrap());
        let state = AppState::new(
            AppConfig::default(),
            AppPaths::default(),
            RecordingSurface::default(),
            notes,
        );
        assert_eq!(state.note_text(), "remember the demo");
    }

    #[test]
    fn test_font_size_intents_clamp() {
        let mut state = state();
        state.apply(Intent::ShowHud);

        for _ in 0..20 {
            state.apply(Intent::IncreaseFontSize);
        }
        assert_eq!(state.overlay.session().unwrap().font_size(), 40.0);

        state.apply(Intent::SetOpacity(7.5));
        assert_eq!(state.overlay.session().unwrap().opacity(), 1.0);
    }

    #[test]
    fn test_appearance_intents_without_surface_are_ignored() {
        let mut state = state();
        state.apply(Intent::IncreaseFontSize);
        state.apply(Intent::SetOpacity(0.2));
        state.apply(Intent::HoverHud(true));
        state.apply(Intent::HideHud);

        assert_eq!(state.overlay.state(), SurfaceState::Absent);
        assert!(state.overlay.session().is_none());
    }

    #[test]
    fn test_surface_failure_is_reported() {
        let mut state = state_with(RecordingSurface::failing());
        state.apply(Intent::ToggleHud);

        assert_eq!(state.overlay.state(), SurfaceState::Absent);
        assert!(state
            .runtime
            .last_error
            .as_deref()
            .unwrap()
            .contains("failed to create overlay surface"));
    }

    #[test]
    fn test_select_view_and_quit() {
        let mut state = state();
        state.apply(Intent::SelectView(DashboardView::Notes));
        assert_eq!(state.current_view, DashboardView::Notes);

        assert!(!state.runtime.quit_requested);
        state.apply(Intent::Quit);
        assert!(state.runtime.quit_requested);
    }

    #[test]
    fn test_save_profile_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let notes = NoteStore::new(PreferenceStore::open_in_memory().unwrap());
        let paths = AppPaths {
            config_file: Some(path.clone()),
            database: None,
        };
        let mut state = AppState::new(AppConfig::default(), paths, RecordingSurface::default(), notes);

        let profile = ProfileConfig {
            user_name: "Grace Hopper".to_string(),
            user_bio: "Compilers".to_string(),
        };
        state.apply(Intent::SaveProfile(profile.clone()));

        assert_eq!(state.config.profile, profile);
        assert!(state.runtime.last_error.is_none());
        assert_eq!(config::load_config(&path).unwrap().profile, profile);
    }

    #[test]
    fn test_saved_notice_cleared_on_view_change() {
        let dir = tempfile::tempdir().unwrap();
        let notes = NoteStore::new(PreferenceStore::open_in_memory().unwrap());
        let paths = AppPaths {
            config_file: Some(dir.path().join("config.toml")),
            database: None,
        };
        let mut state = AppState::new(AppConfig::default(), paths, RecordingSurface::default(), notes);

        state.apply(Intent::SelectView(DashboardView::Settings));
        state.apply(Intent::SaveProfile(ProfileConfig::default()));
        assert_eq!(state.runtime.notice.as_deref(), Some("Profile saved"));

        state.apply(Intent::SelectView(DashboardView::Home));
        assert!(state.runtime.notice.is_none());
    }

    #[test]
    fn test_hover_resets_when_hidden_from_hud() {
        let mut state = state();
        state.apply(Intent::ToggleHud);
        state.apply(Intent::HoverHud(true));
        state.apply(Intent::HideHud);
        state.apply(Intent::ShowHud);

        assert!(!state.overlay.session().unwrap().hovering());
    }

    #[test]
    fn test_save_profile_without_path_reports_error() {
        let mut state = state();
        state.apply(Intent::SaveProfile(ProfileConfig::default()));
        assert!(state.runtime.last_error.is_some());
    }
}
