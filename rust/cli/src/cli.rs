//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cardroom",
    version,
    about = "Texas Hold'em table for the terminal"
)]
pub struct CardroomCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal a single hand and show every seat
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats (2-10)
        #[arg(long)]
        players: Option<usize>,
    },
    /// Rank 5 to 7 cards, e.g. --cards "As Ah Ad Ac Ks 2c 3d"
    Eval {
        #[arg(long)]
        cards: String,
    },
    /// Play hands at one terminal, every seat taking turns at the keyboard
    Play {
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<usize>,
        /// Every seat checks or calls without prompting
        #[arg(long)]
        auto: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
