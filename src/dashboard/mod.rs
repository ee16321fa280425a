//! Dashboard UI Module
//!
//! The main window: profile sidebar, the Toggle HUD card, a read-only view of
//! the note and a small settings page. It also hosts the HUD viewport.

pub mod app;
pub mod state;
pub mod theme;
pub mod views;
pub mod components;
