//! CLI frontend for the Questline habit-quest game.

mod commands;
mod tui;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ql",
    about = "Questline — turn daily goals into a dice-driven board game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive game (missions list + board)
    Play {
        /// RNG seed for deterministic dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Start with the five demo missions
        #[arg(long)]
        sample: bool,
    },

    /// Roll the progress die and print the result(s)
    Roll {
        /// Outcome mode: success (made it) or failure (not today)
        mode: String,

        /// Number of rolls
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// RNG seed for deterministic dice
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the face tables and odds for both outcome modes
    Odds,

    /// Print the board layout for a mission length
    Board {
        /// Mission length in days
        #[arg(short, long, default_value = "30")]
        days: u32,

        /// Player position to mark on the board
        #[arg(long, default_value = "0")]
        day: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, sample } => commands::play::run(seed, sample),
        Commands::Roll { mode, count, seed } => commands::roll::run(&mode, count, seed),
        Commands::Odds => commands::odds::run(),
        Commands::Board { days, day } => commands::board::run(days, day),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
