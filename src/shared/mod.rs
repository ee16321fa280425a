//! Shared state and messaging between the dashboard and the HUD
//!
//! Views never mutate application state directly: they emit [`Intent`]s over
//! an [`IntentBus`], and the app loop applies them to [`AppState`] once per frame.

pub mod state;
pub mod messages;

pub use state::{AppPaths, AppState};
pub use messages::{Intent, IntentBus, IntentSender};
