//! Persistence adapters.
//!
//! The engine only ever sees the infallible [`PetStore`] contract. Adapters
//! do their fallible work through [`StoreResult`] internally, log failures,
//! and report them as "no saved state" or a skipped write.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use aether_core::{PartialState, PetState};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Fixed key under which the pet's state is stored.
pub const STORAGE_KEY: &str = "aetherpet_game_state";

/// Best-effort persistence for a single pet.
pub trait PetStore: Send + Sync {
    /// Previously saved state, or `None` if nothing usable is stored.
    fn load(&self) -> Option<PartialState>;

    /// Write the state. Failures are logged, not returned.
    fn save(&self, state: &PetState);

    /// Delete the saved state. Failures are logged, not returned.
    fn clear(&self);
}

/// Encode a state as a JSON document.
pub(crate) fn encode(state: &PetState) -> StoreResult<String> {
    Ok(serde_json::to_string(state)?)
}

/// Decode a saved document, keeping every field that decodes.
pub(crate) fn decode(text: &str) -> StoreResult<PartialState> {
    let value: Value = serde_json::from_str(text)?;
    let decoded = PartialState::decode_lenient(&value).ok_or(StoreError::NotAnObject)?;
    for key in &decoded.rejected {
        tracing::warn!(field = %key, "ignoring unreadable field in saved state");
    }
    Ok(decoded.state)
}
