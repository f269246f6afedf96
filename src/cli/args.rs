//! CLI argument definitions using clap
//!
//! Commands:
//! - bookstore serve [--config <path>] [--host <host>] [--port <port>] [--no-seed]
//! - bookstore seed

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory book catalogue served over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overriding the config file
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty store
        #[arg(long)]
        no_seed: bool,
    },

    /// Print the default seed books, one JSON object per line
    Seed,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
