use aether_core::{PetMood, PetState, StatKind, StatLevel};
use aether_sim::GameClock;
use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};

/// Window title: the pet's name once it has one.
pub fn title(state: &PetState) -> String {
    if state.pet_name.is_empty() {
        "AetherPet Genesis".to_string()
    } else {
        format!("{} the AetherPet", state.pet_name)
    }
}

pub fn stat_label(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Hunger => "Hunger",
        StatKind::Happiness => "Happiness",
        StatKind::Energy => "Energy",
        StatKind::Hygiene => "Hygiene",
    }
}

pub fn stat_bar(value: f64) -> String {
    let pct = value.round() as u32;
    let filled = ((value / 10.0).round() as usize).min(10);
    let empty = 10 - filled;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));

    let bar = match StatLevel::of(value) {
        StatLevel::Good => bar.green(),
        StatLevel::Fair => bar.yellow(),
        StatLevel::Low => bar.red(),
    };
    format!("[{bar}] {pct:>3}%")
}

fn mood_label(mood: PetMood) -> ColoredString {
    let text = mood.to_string();
    match mood {
        PetMood::Happy => text.green().bold(),
        PetMood::Neutral => text.normal(),
        PetMood::Hungry | PetMood::Tired | PetMood::Dirty | PetMood::Sad => text.yellow(),
        PetMood::Sick => text.red().bold(),
    }
}

pub fn stats_table(state: &PetState) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Level"]);
    for kind in StatKind::ALL {
        table.add_row(vec![
            stat_label(kind).to_string(),
            stat_bar(state.stats.get(kind)),
        ]);
    }
    table
}

pub fn print_status(state: &PetState) {
    println!("  {}", title(state).bold());
    println!();

    if state.show_intro {
        println!("  {}", "An egg rests in the shrine, waiting for a keeper.".dimmed());
        println!("  No pet yet. Run `aetherpet hatch <name> <type>` to begin.");
        return;
    }

    println!("{}", stats_table(state));
    println!();
    println!(
        "  Age: {} day{}   Mood: {}   Stage: {}   Type: {}",
        state.pet_age,
        if state.pet_age == 1 { "" } else { "s" },
        mood_label(state.mood),
        state.pet_stage,
        state.pet_type
    );
    let sleep = if state.is_sleeping {
        "asleep".blue().to_string()
    } else {
        "awake".to_string()
    };
    println!(
        "  {} ({})",
        sleep,
        GameClock::new(state.game_time).to_string().dimmed()
    );
}

/// One compact line per update, for `watch`.
pub fn status_line(state: &PetState) -> String {
    let clock = GameClock::new(state.game_time);
    let gauges: Vec<String> = StatKind::ALL
        .iter()
        .map(|k| format!("{k} {:>3.0}", state.stats.get(*k)))
        .collect();
    format!(
        "[{clock}] {} | {}{}",
        gauges.join("  "),
        state.mood,
        if state.is_sleeping { " (asleep)" } else { "" }
    )
}
