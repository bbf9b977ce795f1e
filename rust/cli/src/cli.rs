//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hanabi",
    version,
    about = "Three-player Hanabi at the terminal"
)]
pub struct HanabiCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one interactive game, one operator controlling all three seats
    Play {
        /// Shuffle seed; a random one is drawn and printed when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Three comma-separated player names, in seat order
        #[arg(long, value_delimiter = ',')]
        players: Option<Vec<String>>,
        /// Append the finished game to this JSONL file
        #[arg(long)]
        history: Option<String>,
    },
    /// Deal a fresh game and show every hand face up
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
