use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use aether_core::{PartialState, PetState};

use super::{PetStore, STORAGE_KEY, decode, encode};
use crate::error::{StoreError, StoreResult};

/// Directory-backed key-value store: each key is a `<key>.json` file.
///
/// Writes go to a temporary file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    key: String,
}

impl JsonFileStore {
    /// A store in `dir` using [`STORAGE_KEY`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    /// A store in `dir` using a custom key.
    pub fn with_key(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// The file holding the saved document.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    /// Whether a save file exists.
    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    fn try_load(&self) -> StoreResult<Option<PartialState>> {
        let path = self.path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        decode(&text).map(Some)
    }

    fn try_save(&self, state: &PetState) -> StoreResult<()> {
        let text = encode(state)?;
        fs::create_dir_all(&self.dir).map_err(|source| io_err(&self.dir, source))?;

        let tmp = self.dir.join(format!(".{}.json.tmp", self.key));
        fs::write(&tmp, text).map_err(|source| io_err(&tmp, source))?;

        let path = self.path();
        fs::rename(&tmp, &path).map_err(|source| io_err(&path, source))
    }

    fn try_clear(&self) -> StoreResult<()> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

fn io_err(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl PetStore for JsonFileStore {
    fn load(&self) -> Option<PartialState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("error loading game state: {e}");
                None
            }
        }
    }

    fn save(&self, state: &PetState) {
        if let Err(e) = self.try_save(state) {
            tracing::error!("error saving game state: {e}");
        } else {
            tracing::trace!(path = %self.path().display(), "game state saved");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.try_clear() {
            tracing::error!("error clearing game state: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aether_core::{Interaction, PetStage};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(!store.exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn save_creates_keyed_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        store.save(&PetState::default());
        assert!(store.exists());
        assert!(store.path().ends_with("aetherpet_game_state.json"));
        assert!(!dir.path().join("nested/.aetherpet_game_state.json.tmp").exists());
    }

    #[test]
    fn round_trip_keeps_timestamps() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let at = Utc.with_ymd_and_hms(2023, 11, 5, 8, 30, 15).unwrap();
        let mut state = PetState {
            pet_stage: PetStage::Baby,
            ..PetState::default()
        };
        state.last_interaction.record(Interaction::Feed, at);
        store.save(&state);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.last_interaction.unwrap().feed, Some(at));
        assert_eq!(loaded.pet_stage, Some(PetStage::Baby));
    }

    #[test]
    fn unreadable_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.clear();
        store.save(&PetState::default());
        store.clear();
        assert!(!store.exists());
        store.clear();
    }

    #[test]
    fn save_into_unwritable_location_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file where the directory should be.
        let store = JsonFileStore::new(&blocker);
        store.save(&PetState::default());
        assert!(store.load().is_none());
    }
}
