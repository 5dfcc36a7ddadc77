//! Command-line interface for quoridor.

use crate::settings::Settings;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Quoridor - engine-vs-engine self-play and settings tool
#[derive(Parser, Debug)]
#[command(name = "quoridor")]
#[command(about = "Quoridor engine driver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one engine-vs-engine game and print the record as JSON
    Selfplay(SelfplayArgs),

    /// Print the effective settings as JSON
    Config {
        /// Settings file to read instead of the default location
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Settings overrides for a self-play game
#[derive(Args, Debug, Default)]
pub struct SelfplayArgs {
    /// Settings file to read instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (odd, 3 to 25)
    #[arg(long)]
    pub dimension: Option<u8>,

    /// Walls per player
    #[arg(long)]
    pub walls: Option<u8>,

    /// Thinking time per move in milliseconds
    #[arg(long)]
    pub think_ms: Option<u64>,

    /// Deepest iterative-deepening pass
    #[arg(long)]
    pub max_depth: Option<u8>,

    /// Stop after this many plies
    #[arg(long)]
    pub max_plies: Option<u32>,
}

impl SelfplayArgs {
    /// Apply command-line overrides on top of file settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(dimension) = self.dimension {
            settings.dimension = dimension;
        }
        if let Some(walls) = self.walls {
            settings.walls_per_player = walls;
        }
        if let Some(think_ms) = self.think_ms {
            settings.search.think_time_ms = think_ms;
        }
        if let Some(max_depth) = self.max_depth {
            settings.search.max_depth = max_depth;
        }
        if let Some(max_plies) = self.max_plies {
            settings.max_plies = max_plies;
        }
    }
}
