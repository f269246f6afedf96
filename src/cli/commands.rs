//! CLI command implementations

use std::fs;
use std::io;
use std::path::Path;

use crate::book::default_books;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json_lines;

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            no_seed,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if no_seed {
                config.seed = false;
            }
            config.validate().map_err(CliError::Config)?;
            serve(config)
        }
        Command::Seed => seed(),
    }
}

/// Load configuration from a JSON file, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let Some(path) = path else {
        return Ok(HttpServerConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::Config)?;

    Ok(config)
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    log_event(Event::BootStart);
    let port = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("host", config.host.as_str()), ("port", port.as_str())],
    );

    let seeded = config.seed;
    let server = HttpServer::with_config(config);
    if seeded {
        let count = server.metrics().snapshot().books.to_string();
        log_event_with_fields(Event::StoreSeeded, &[("books", count.as_str())]);
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::BootFailed, &[("reason", reason.as_str())]);
        CliError::BootFailed(format!("HTTP server failed: {}", reason))
    })
}

/// Print the default seed to stdout
pub fn seed() -> CliResult<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json_lines(&mut lock, &default_books())
}
