//! HUD visibility controller
//!
//! Owns the single overlay surface and drives it through
//! Absent -> Visible <-> Hidden. Once created, the surface is only ever
//! hidden, never destroyed, so its contents survive every toggle.

use tracing::{debug, info};

use super::note::NoteSession;
use super::surface::{PlatformSurface, SurfaceError};

/// Lifecycle state of the overlay surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    /// No surface has been created yet
    #[default]
    Absent,
    /// Created but off screen
    Hidden,
    /// Created and on screen
    Visible,
}

impl SurfaceState {
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceState::Absent => "Not created",
            SurfaceState::Hidden => "Hidden",
            SurfaceState::Visible => "Visible",
        }
    }
}

/// Mediates creation, show, hide and toggle of the HUD surface
pub struct OverlayController<S: PlatformSurface> {
    surface: S,
    state: SurfaceState,
    session: Option<NoteSession>,
    creations: usize,
}

impl<S: PlatformSurface> OverlayController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: SurfaceState::Absent,
            session: None,
            creations: 0,
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    #[allow(dead_code)]
    pub fn exists(&self) -> bool {
        self.state != SurfaceState::Absent
    }

    pub fn is_visible(&self) -> bool {
        self.state == SurfaceState::Visible
    }

    /// How many times a surface has been allocated (0 or 1 for one controller)
    #[allow(dead_code)]
    pub fn creation_count(&self) -> usize {
        self.creations
    }

    /// Appearance of the current surface, if one exists
    pub fn session(&self) -> Option<&NoteSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut NoteSession> {
        self.session.as_mut()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Show the HUD if it is absent or hidden, hide it if it is visible
    pub fn toggle(&mut self) -> Result<SurfaceState, SurfaceError> {
        match self.state {
            SurfaceState::Visible => self.hide(),
            SurfaceState::Absent | SurfaceState::Hidden => self.show()?,
        }
        Ok(self.state)
    }

    /// Make the HUD visible, creating it first if needed. No-op when already visible.
    pub fn show(&mut self) -> Result<(), SurfaceError> {
        match self.state {
            SurfaceState::Visible => return Ok(()),
            SurfaceState::Absent => self.create()?,
            SurfaceState::Hidden => {}
        }

        self.surface.show();
        self.state = SurfaceState::Visible;
        info!("HUD shown");
        Ok(())
    }

    /// Take the HUD off screen, keeping its state. No-op unless visible.
    pub fn hide(&mut self) {
        if self.state != SurfaceState::Visible {
            debug!("Hide requested while HUD is {:?}", self.state);
            return;
        }

        self.surface.hide();
        self.state = SurfaceState::Hidden;
        // The pointer cannot be over a hidden HUD
        if let Some(session) = self.session.as_mut() {
            session.set_hovering(false);
        }
        info!("HUD hidden");
    }

    fn create(&mut self) -> Result<(), SurfaceError> {
        self.surface.set_focusable(false);
        self.surface.set_always_on_top_across_spaces(true);
        self.surface.create()?;

        self.session = Some(NoteSession::default());
        self.creations += 1;
        self.state = SurfaceState::Hidden;
        info!("HUD surface created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::surface::testing::{RecordingSurface, SurfaceCall};

    fn controller() -> OverlayController<RecordingSurface> {
        OverlayController::new(RecordingSurface::default())
    }

    #[test]
    fn test_initial_state_is_absent() {
        let c = controller();
        assert_eq!(c.state(), SurfaceState::Absent);
        assert!(!c.exists());
        assert!(!c.is_visible());
        assert!(c.session().is_none());
        assert!(c.surface().calls.is_empty());
    }

    #[test]
    fn test_toggle_alternates_and_creates_once() {
        let mut c = controller();

        for n in 1..=9 {
            let state = c.toggle().unwrap();
            let expected = if n % 2 == 1 {
                SurfaceState::Visible
            } else {
                SurfaceState::Hidden
            };
            assert_eq!(state, expected, "after {} toggles", n);
            assert!(c.exists());
            assert_eq!(c.creation_count(), 1);
        }

        assert_eq!(c.surface().count(SurfaceCall::Create), 1);
        assert_eq!(c.surface().count(SurfaceCall::Show), 5);
        assert_eq!(c.surface().count(SurfaceCall::Hide), 4);
    }

    #[test]
    fn test_three_toggles() {
        let mut c = controller();

        assert_eq!(c.toggle().unwrap(), SurfaceState::Visible);
        assert!(c.is_visible());

        assert_eq!(c.toggle().unwrap(), SurfaceState::Hidden);
        assert!(c.exists());
        assert!(!c.is_visible());

        assert_eq!(c.toggle().unwrap(), SurfaceState::Visible);
        assert_eq!(c.creation_count(), 1);
    }

    #[test]
    fn test_surface_configured_before_first_show() {
        let mut c = controller();
        c.show().unwrap();

        assert_eq!(
            c.surface().calls,
            vec![
                SurfaceCall::SetFocusable(false),
                SurfaceCall::SetAlwaysOnTopAcrossSpaces(true),
                SurfaceCall::Create,
                SurfaceCall::Show,
            ]
        );
    }

    #[test]
    fn test_show_is_idempotent() {
        let mut c = controller();
        c.show().unwrap();
        c.show().unwrap();
        c.show().unwrap();

        assert!(c.is_visible());
        assert_eq!(c.surface().count(SurfaceCall::Show), 1);
        assert_eq!(c.creation_count(), 1);
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut c = controller();
        c.show().unwrap();
        c.hide();
        c.hide();

        assert_eq!(c.state(), SurfaceState::Hidden);
        assert_eq!(c.surface().count(SurfaceCall::Hide), 1);
    }

    #[test]
    fn test_hide_when_absent_does_not_create() {
        let mut c = controller();
        c.hide();

        assert_eq!(c.state(), SurfaceState::Absent);
        assert_eq!(c.creation_count(), 0);
        assert!(c.surface().calls.is_empty());
    }

    #[test]
    fn test_session_survives_hide_and_show() {
        let mut c = controller();
        c.show().unwrap();
        {
            let session = c.session_mut().unwrap();
            session.set_opacity(0.3);
            session.increase_font_size();
        }

        c.hide();
        c.show().unwrap();

        let session = c.session().unwrap();
        assert_eq!(session.opacity(), 0.3);
        assert_eq!(session.font_size(), 20.0);
    }

    #[test]
    fn test_hide_clears_hover() {
        let mut c = controller();
        c.show().unwrap();
        c.session_mut().unwrap().set_hovering(true);

        c.hide();
        assert!(!c.session().unwrap().hovering());

        c.show().unwrap();
        assert!(!c.session().unwrap().hovering());
    }

    #[test]
    fn test_new_surface_starts_with_default_session() {
        let mut first = controller();
        first.show().unwrap();
        first.session_mut().unwrap().set_opacity(1.0);

        let mut second = controller();
        second.show().unwrap();
        assert_eq!(*second.session().unwrap(), NoteSession::default());
    }

    #[test]
    fn test_failed_creation_stays_absent() {
        let mut c = OverlayController::new(RecordingSurface::failing());

        assert!(c.toggle().is_err());
        assert_eq!(c.state(), SurfaceState::Absent);
        assert_eq!(c.creation_count(), 0);
        assert!(c.session().is_none());
        assert_eq!(c.surface().count(SurfaceCall::Show), 0);
    }
}
