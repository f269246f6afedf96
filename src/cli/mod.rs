//! CLI module
//!
//! - serve: boot the HTTP server
//! - seed: print the default books

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, run, run_command, seed, serve};
pub use errors::{CliError, CliResult};
