//! Note text persistence
//!
//! There is one note, stored under a fixed key. Saving is fire-and-forget:
//! a failed write is logged and the in-memory text stays authoritative.

use tracing::{debug, warn};

use super::database::PreferenceStore;

/// Key the note text is stored under
pub const NOTE_KEY: &str = "noteContent_main";

/// Reads and writes the single note
pub struct NoteStore {
    store: PreferenceStore,
}

impl NoteStore {
    pub fn new(store: PreferenceStore) -> Self {
        Self { store }
    }

    /// Load the persisted note, or an empty string if nothing is stored
    pub fn load(&self) -> String {
        match self.store.get(NOTE_KEY) {
            Ok(Some(text)) => {
                debug!("Loaded note ({} chars)", text.chars().count());
                text
            }
            Ok(None) => String::new(),
            Err(e) => {
                warn!("Failed to read note, starting empty: {}", e);
                String::new()
            }
        }
    }

    /// Persist the note text
    pub fn save(&self, text: &str) {
        if let Err(e) = self.store.set(NOTE_KEY, text) {
            warn!("Failed to persist note: {}", e);
        }
    }
}
