use std::path::Path;

use aether_sim::{JsonFileStore, PetStore};
use colored::Colorize;

pub fn run(dir: &Path) -> Result<(), String> {
    let store = JsonFileStore::new(dir);
    if !store.exists() {
        println!("  {}", "Nothing to reset.".dimmed());
        return Ok(());
    }

    store.clear();
    if store.exists() {
        return Err(format!("could not remove {}", store.path().display()));
    }
    println!("  Save cleared. A new egg awaits.");
    Ok(())
}
