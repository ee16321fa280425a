//! egui viewport implementation of [`PlatformSurface`]
//!
//! The HUD is an immediate secondary viewport of the dashboard's eframe app.
//! Creating the surface only flips a flag: the window itself is allocated the
//! next time the dashboard renders the viewport, and is kept alive by
//! rendering it every frame from then on. Hiding never stops rendering it.

use egui::{ViewportBuilder, ViewportId, WindowLevel};

use super::surface::{PlatformSurface, SurfaceError};
use crate::config::OverlaySettings;

/// Window title of the HUD, also used to find the native window
pub const HUD_TITLE: &str = "Dupely HUD";

/// On macOS visibility is driven natively (orderFront / orderOut) so that
/// showing the panel never makes it key; elsewhere egui's Visible command is used.
const NATIVE_VISIBILITY: bool = cfg!(target_os = "macos");

/// Initial placement of the HUD window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub min_size: [f32; 2],
}

impl From<&OverlaySettings> for SurfaceGeometry {
    fn from(settings: &OverlaySettings) -> Self {
        Self {
            position: [settings.position.0, settings.position.1],
            size: [settings.size.0, settings.size.1],
            min_size: [settings.min_size.0, settings.min_size.1],
        }
    }
}

/// HUD surface backed by an egui immediate viewport
pub struct ViewportSurface {
    id: ViewportId,
    geometry: SurfaceGeometry,
    created: bool,
    visible: bool,
    focusable: bool,
    always_on_top: bool,
    /// Native window state still has to be applied after the next frame
    native_dirty: bool,
}

impl ViewportSurface {
    pub fn new(geometry: SurfaceGeometry) -> Self {
        Self {
            id: ViewportId::from_hash_of("dupely_hud"),
            geometry,
            created: false,
            visible: false,
            focusable: true,
            always_on_top: false,
            native_dirty: false,
        }
    }

    pub fn id(&self) -> ViewportId {
        self.id
    }

    /// Description of the HUD window for this frame, or `None` before creation
    pub fn builder(&self) -> Option<ViewportBuilder> {
        if !self.created {
            return None;
        }

        let level = if self.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        Some(
            ViewportBuilder::default()
                .with_title(HUD_TITLE)
                .with_position(self.geometry.position)
                .with_inner_size(self.geometry.size)
                .with_min_inner_size(self.geometry.min_size)
                .with_decorations(false)
                .with_transparent(true)
                .with_resizable(true)
                .with_taskbar(false)
                .with_window_level(level)
                .with_active(self.focusable)
                .with_visible(NATIVE_VISIBILITY || self.visible),
        )
    }

    /// Apply window-manager behaviour egui cannot express. Call after the
    /// viewport has been rendered so the native window exists.
    pub fn after_frame(&mut self) {
        if !self.created || !self.native_dirty {
            return;
        }

        #[cfg(target_os = "macos")]
        {
            let options = super::macos::PanelOptions {
                visible: self.visible,
                across_spaces: self.always_on_top,
            };
            if super::macos::apply_panel_options(HUD_TITLE, options) {
                self.native_dirty = false;
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            self.native_dirty = false;
        }
    }
}

impl PlatformSurface for ViewportSurface {
    fn create(&mut self) -> Result<(), SurfaceError> {
        if self.created {
            return Err(SurfaceError::Create("HUD viewport already exists".to_string()));
        }
        self.created = true;
        self.native_dirty = true;
        Ok(())
    }

    fn show(&mut self) {
        self.visible = true;
        self.native_dirty = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.native_dirty = true;
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    fn set_always_on_top_across_spaces(&mut self, enabled: bool) {
        self.always_on_top = enabled;
        self.native_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::controller::OverlayController;

    fn surface() -> ViewportSurface {
        ViewportSurface::new(SurfaceGeometry::from(&OverlaySettings::default()))
    }

    #[test]
    fn test_no_builder_before_creation() {
        assert!(surface().builder().is_none());
    }

    #[test]
    fn test_builder_after_show_is_floating_and_inactive() {
        let mut controller = OverlayController::new(surface());
        controller.show().unwrap();

        let builder = controller.surface().builder().unwrap();
        assert_eq!(builder.title.as_deref(), Some(HUD_TITLE));
        assert_eq!(builder.window_level, Some(WindowLevel::AlwaysOnTop));
        assert_eq!(builder.active, Some(false));
        assert_eq!(builder.decorations, Some(false));
        assert_eq!(builder.transparent, Some(true));
        assert_eq!(builder.visible, Some(true));
        assert_eq!(builder.inner_size, Some(egui::vec2(450.0, 350.0)));
        assert_eq!(builder.min_inner_size, Some(egui::vec2(300.0, 200.0)));
    }

    #[test]
    fn test_hidden_surface_keeps_builder() {
        let mut controller = OverlayController::new(surface());
        controller.show().unwrap();
        controller.hide();

        let builder = controller.surface().builder().unwrap();
        assert_eq!(builder.visible, Some(NATIVE_VISIBILITY));
    }

    #[test]
    fn test_second_create_is_rejected() {
        let mut s = surface();
        s.create().unwrap();
        assert!(s.create().is_err());
    }

    #[test]
    fn test_geometry_from_settings() {
        let settings = OverlaySettings {
            position: (10.0, 20.0),
            size: (320.0, 240.0),
            min_size: (300.0, 200.0),
            toggle_hotkey: String::new(),
        };
        let geometry = SurfaceGeometry::from(&settings);
        assert_eq!(geometry.position, [10.0, 20.0]);
        assert_eq!(geometry.size, [320.0, 240.0]);
    }
}
