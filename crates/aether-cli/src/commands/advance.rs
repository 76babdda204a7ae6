use std::path::Path;

use aether_sim::{GameClock, PetEventKind};
use colored::Colorize;

use crate::render;

pub fn run(dir: &Path, ticks: u64) -> Result<(), String> {
    let mut engine = super::open_hatched(dir)?;

    let start = engine.clock();
    let applied = engine.run(ticks);

    let plural = if applied == 1 { "" } else { "s" };
    println!(
        "  Advanced {applied} minute{plural} ({start} -> {})",
        engine.clock()
    );

    let notable: Vec<_> = engine
        .events()
        .since(start.minutes())
        .filter(|e| {
            matches!(
                e.kind,
                PetEventKind::Birthday { .. } | PetEventKind::MoodChanged { .. }
            )
        })
        .collect();
    if !notable.is_empty() {
        println!();
        for event in notable {
            println!(
                "  {} {}",
                format!("[{}]", GameClock::new(event.game_time)).dimmed(),
                event.description
            );
        }
    }

    println!();
    println!("{}", render::status_line(engine.state()));
    Ok(())
}
