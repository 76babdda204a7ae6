//! Terminal frontend for AetherPet.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aetherpet",
    about = "AetherPet: raise an elemental creature from the egg",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the save file (default: current directory)
    #[arg(short, long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the pet's stats, mood, and growth
    Status,

    /// Name your pet and choose its element to hatch the egg
    Hatch {
        /// The pet's name
        name: String,

        /// Element: fire, water, forest, or electric
        #[arg(value_name = "TYPE")]
        pet_type: String,
    },

    /// Feed the pet
    Feed,

    /// Play with the pet
    Play,

    /// Clean the pet
    Clean,

    /// Put the pet to sleep, or wake it up
    Sleep,

    /// Fast-forward game time
    Advance {
        /// Number of game minutes to simulate (default: 60)
        #[arg(short, long, default_value = "60")]
        ticks: u64,
    },

    /// Keep the pet's clock running and print each change
    Watch {
        /// How long to watch, in real seconds
        #[arg(short, long, default_value = "10")]
        seconds: u64,

        /// Real milliseconds per game minute
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
    },

    /// Delete the save and start over
    Reset,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let dir = cli.dir;

    let result = match cli.command {
        Commands::Status => commands::status::run(&dir),
        Commands::Hatch { name, pet_type } => commands::hatch::run(&dir, &name, &pet_type),
        Commands::Feed => commands::care::run(&dir, commands::care::Care::Feed),
        Commands::Play => commands::care::run(&dir, commands::care::Care::Play),
        Commands::Clean => commands::care::run(&dir, commands::care::Care::Clean),
        Commands::Sleep => commands::care::run(&dir, commands::care::Care::Sleep),
        Commands::Advance { ticks } => commands::advance::run(&dir, ticks),
        Commands::Watch {
            seconds,
            interval_ms,
        } => commands::watch::run(&dir, seconds, interval_ms),
        Commands::Reset => commands::reset::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
