//! CLI argument definitions using clap
//!
//! Commands:
//! - phonedir demo [--config <path>]
//! - phonedir serve [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// phonedir - An in-memory phone directory
#[derive(Parser, Debug)]
#[command(name = "phonedir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load sample contacts and run the sample queries
    Demo {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load sample contacts, then answer JSON requests read from stdin
    Serve {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
