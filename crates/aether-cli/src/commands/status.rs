use std::path::Path;

use aether_sim::SimConfig;

use crate::render;

pub fn run(dir: &Path) -> Result<(), String> {
    let engine = super::open_engine(dir, SimConfig::default());
    render::print_status(engine.state());
    Ok(())
}
