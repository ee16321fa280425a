//! Platform surface capability
//!
//! The controller only talks to the window system through this trait, so the
//! visibility logic is independent of any concrete windowing backend.

use thiserror::Error;

/// Errors raised by a platform surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to create overlay surface: {0}")]
    Create(String),
}

/// A floating window that can be created once and then shown or hidden
pub trait PlatformSurface {
    /// Allocate the window. Called at most once per surface.
    fn create(&mut self) -> Result<(), SurfaceError>;

    /// Bring the window on screen without activating the application.
    fn show(&mut self);

    /// Take the window off screen, keeping its contents.
    fn hide(&mut self);

    /// Whether the window may take keyboard focus when shown.
    fn set_focusable(&mut self, focusable: bool);

    /// Keep the window above other windows, on every desktop and over full-screen apps.
    fn set_always_on_top_across_spaces(&mut self, enabled: bool);
}
