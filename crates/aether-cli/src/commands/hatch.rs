use std::path::Path;

use aether_core::PetType;
use aether_sim::SimConfig;
use colored::Colorize;

const INCOMPLETE: &str = "Please give your pet a name and choose a type!";

pub fn run(dir: &Path, name: &str, pet_type: &str) -> Result<(), String> {
    let pet_type: PetType = pet_type.parse::<PetType>().map_err(|e| e.to_string())?;
    if name.trim().is_empty() || !pet_type.is_chosen() {
        return Err(INCOMPLETE.into());
    }

    let mut engine = super::open_engine(dir, SimConfig::default());
    if !engine.state().show_intro {
        return Err(format!(
            "you already care for {}. Run `aetherpet reset` to start over.",
            engine.state().pet_name
        ));
    }

    engine.set_pet_name(name);
    engine.set_pet_type(pet_type);
    engine.complete_intro();

    println!(
        "  {} Welcome to your new adventure with {name}!",
        "Hatched!".green().bold()
    );
    println!(
        "  {}",
        format!("A {pet_type} {} emerges from the crystal.", engine.state().pet_stage).dimmed()
    );
    Ok(())
}
