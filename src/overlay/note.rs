//! Session-local HUD appearance
//!
//! Opacity and font size belong to one overlay surface. They start from the
//! defaults when the surface is created and are never persisted.

pub const DEFAULT_OPACITY: f32 = 0.6;
pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 1.0;

pub const DEFAULT_FONT_SIZE: f32 = 18.0;
pub const MIN_FONT_SIZE: f32 = 10.0;
pub const MAX_FONT_SIZE: f32 = 40.0;
/// Change applied by one press of the smaller/larger font buttons
pub const FONT_SIZE_STEP: f32 = 2.0;

/// Appearance state of the HUD for the lifetime of its surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteSession {
    opacity: f32,
    font_size: f32,
    hovering: bool,
}

impl Default for NoteSession {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            font_size: DEFAULT_FONT_SIZE,
            hovering: false,
        }
    }
}

impl NoteSession {
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Whether the pointer is over the HUD (controls are shown only then)
    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Set the background opacity, clamped to [0.1, 1.0]. NaN is ignored.
    pub fn set_opacity(&mut self, opacity: f32) {
        if opacity.is_nan() {
            return;
        }
        self.opacity = opacity.clamp(MIN_OPACITY, MAX_OPACITY);
    }

    /// Change the font size by `delta`, clamped to [10, 40]. NaN is ignored.
    pub fn adjust_font_size(&mut self, delta: f32) {
        if delta.is_nan() {
            return;
        }
        self.font_size = (self.font_size + delta).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    pub fn increase_font_size(&mut self) {
        self.adjust_font_size(FONT_SIZE_STEP);
    }

    pub fn decrease_font_size(&mut self) {
        self.adjust_font_size(-FONT_SIZE_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = NoteSession::default();
        assert_eq!(session.opacity(), 0.6);
        assert_eq!(session.font_size(), 18.0);
        assert!(!session.hovering());
    }

    #[test]
    fn test_font_size_clamps_at_max() {
        let mut session = NoteSession::default();
        for _ in 0..20 {
            session.increase_font_size();
        }
        assert_eq!(session.font_size(), 40.0);
    }

    #[test]
    fn test_font_size_clamps_at_min() {
        let mut session = NoteSession::default();
        for _ in 0..20 {
            session.decrease_font_size();
        }
        assert_eq!(session.font_size(), 10.0);
    }

    #[test]
    fn test_large_font_adjustments_clamp() {
        let mut session = NoteSession::default();

        session.adjust_font_size(1000.0);
        assert_eq!(session.font_size(), MAX_FONT_SIZE);

        session.adjust_font_size(-1000.0);
        assert_eq!(session.font_size(), MIN_FONT_SIZE);

        session.adjust_font_size(f32::NAN);
        assert_eq!(session.font_size(), MIN_FONT_SIZE);
    }

    #[test]
    fn test_opacity_clamps() {
        let mut session = NoteSession::default();

        session.set_opacity(5.0);
        assert_eq!(session.opacity(), 1.0);

        session.set_opacity(-3.0);
        assert_eq!(session.opacity(), 0.1);

        session.set_opacity(0.45);
        assert_eq!(session.opacity(), 0.45);

        session.set_opacity(f32::NAN);
        assert_eq!(session.opacity(), 0.45);

        session.set_opacity(f32::INFINITY);
        assert_eq!(session.opacity(), 1.0);
    }

    #[test]
    fn test_step_round_trip_from_default() {
        let mut session = NoteSession::default();
        session.increase_font_size();
        assert_eq!(session.font_size(), 20.0);
        session.decrease_font_size();
        session.decrease_font_size();
        assert_eq!(session.font_size(), 16.0);
    }
}
