//! CLI frontend for the Mystery Box guessing game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mb",
    about = "Mystery Box: probe the box, then guess what is inside",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in game data to a JSON file
    Init {
        /// File to create
        file: PathBuf,
    },

    /// Validate a game data file
    Check {
        /// Game data file to validate
        file: PathBuf,
    },

    /// List the available actions and creature counts
    Catalog {
        /// Game data file (default: built-in data)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Play a round in the terminal
    Play {
        /// Game data file (default: built-in data)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// RNG seed for a reproducible creature (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting action points
        #[arg(short, long, default_value = "6")]
        budget: u32,

        /// Stress at which the creature flees
        #[arg(long, default_value = "100")]
        max_stress: u32,

        /// Chance in percent that the box holds a serpent
        #[arg(long, default_value = "25")]
        serpent_chance: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { file } => commands::init::run(&file),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Catalog { data } => commands::catalog::run(data.as_deref()),
        Commands::Play {
            data,
            seed,
            budget,
            max_stress,
            serpent_chance,
        } => commands::play::run(
            data.as_deref(),
            commands::play::PlayOptions {
                seed,
                budget,
                max_stress,
                serpent_chance,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
