//! User intents emitted by views

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::trace;

use crate::config::ProfileConfig;
use crate::dashboard::state::DashboardView;

/// A user action, produced by a view and applied by the app loop
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Create/show the HUD if absent or hidden, hide it if visible
    ToggleHud,
    /// Show the HUD
    ShowHud,
    /// Hide the HUD (close button)
    HideHud,
    /// Replace the note text
    EditNote(String),
    /// Set HUD background opacity
    SetOpacity(f32),
    /// Enlarge the HUD font by one step
    IncreaseFontSize,
    /// Shrink the HUD font by one step
    DecreaseFontSize,
    /// Pointer entered (true) or left (false) the HUD
    HoverHud(bool),
    /// Switch the dashboard page
    SelectView(DashboardView),
    /// Store an edited profile in the config file
    SaveProfile(ProfileConfig),
    /// Exit the application
    Quit,
}

/// Cloneable handle views use to emit intents
#[derive(Debug, Clone)]
pub struct IntentSender(Sender<Intent>);

impl IntentSender {
    pub fn send(&self, intent: Intent) {
        trace!("Intent emitted: {:?}", intent);
        // The receiver lives as long as the app loop
        let _ = self.0.send(intent);
    }
}

/// Queue between views and the app loop
pub struct IntentBus {
    sender: Sender<Intent>,
    receiver: Receiver<Intent>,
}

impl Default for IntentBus {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentBus {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> IntentSender {
        IntentSender(self.sender.clone())
    }

    /// Take every pending intent in emission order
    pub fn drain(&self) -> Vec<Intent> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let bus = IntentBus::new();
        let sender = bus.sender();

        sender.send(Intent::ToggleHud);
        sender.send(Intent::EditNote("a".to_string()));
        bus.sender().send(Intent::HideHud);

        assert_eq!(
            bus.drain(),
            vec![
                Intent::ToggleHud,
                Intent::EditNote("a".to_string()),
                Intent::HideHud,
            ]
        );
        assert!(bus.drain().is_empty());
    }
}
