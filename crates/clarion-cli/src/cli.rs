//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Fact-check claims from the command line.
#[derive(Debug, Parser)]
#[command(name = "clarion", version, about)]
pub struct Cli {
    /// Emit raw JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fact-check a single claim
    Check {
        /// The claim to evaluate
        claim: String,
    },

    /// Show trending headlines with fact-check verdicts
    Trending {
        /// Two-letter country code for the trend search
        #[arg(long, env = "CLARION_COUNTRY")]
        country: Option<String>,
    },
}
