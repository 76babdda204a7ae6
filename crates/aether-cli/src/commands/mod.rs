pub mod advance;
pub mod care;
pub mod hatch;
pub mod reset;
pub mod status;
pub mod watch;

use std::path::Path;
use std::sync::Arc;

use aether_sim::{JsonFileStore, PetEngine, SimConfig, SystemTimeSource};

/// Open the pet saved in `dir`, or a fresh egg if there is none.
fn open_engine(dir: &Path, config: SimConfig) -> PetEngine {
    let store = Arc::new(JsonFileStore::new(dir));
    PetEngine::load(config, store, Arc::new(SystemTimeSource))
}

/// Open the saved pet, refusing if onboarding has not happened yet.
fn open_hatched(dir: &Path) -> Result<PetEngine, String> {
    let engine = open_engine(dir, SimConfig::default());
    if engine.state().show_intro {
        return Err("No pet yet. Run `aetherpet hatch <name> <type>` first.".into());
    }
    Ok(engine)
}
