//! Overlay Presentation Layer
//!
//! The HUD: a floating, translucent notes window that stays above other
//! applications without taking focus. [`OverlayController`] owns its
//! lifecycle; [`ViewportSurface`] is the egui window behind it.

pub mod controller;
pub mod note;
pub mod surface;
pub mod view;
pub mod viewport;
pub mod widgets;

#[cfg(target_os = "macos")]
mod macos;

pub use controller::{OverlayController, SurfaceState};
pub use surface::PlatformSurface;
pub use view::render_hud;
pub use viewport::{SurfaceGeometry, ViewportSurface};
