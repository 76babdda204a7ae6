use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use aether_core::{PartialState, PetState};

use super::{PetStore, STORAGE_KEY, decode, encode};

/// In-process key-value store holding the saved document as JSON text.
///
/// Counts save calls so callers can check when persistence happened.
#[derive(Debug)]
pub struct MemoryStore {
    key: String,
    entries: Mutex<HashMap<String, String>>,
    saves: AtomicUsize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty store using [`STORAGE_KEY`].
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    /// An empty store using a custom key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Mutex::new(HashMap::new()),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of times [`PetStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The stored document text, if any.
    pub fn raw(&self) -> Option<String> {
        self.entries().get(&self.key).cloned()
    }

    /// Replace the stored document text directly.
    pub fn put_raw(&self, text: impl Into<String>) {
        self.entries().insert(self.key.clone(), text.into());
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PetStore for MemoryStore {
    fn load(&self) -> Option<PartialState> {
        let text = self.raw()?;
        match decode(&text) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::error!(key = %self.key, "error loading game state: {e}");
                None
            }
        }
    }

    fn save(&self, state: &PetState) {
        self.saves.fetch_add(1, Ordering::SeqCst);
        match encode(state) {
            Ok(text) => self.put_raw(text),
            Err(e) => tracing::error!(key = %self.key, "error saving game state: {e}"),
        }
    }

    fn clear(&self) {
        self.entries().remove(&self.key);
    }
}
