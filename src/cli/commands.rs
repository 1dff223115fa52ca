//! CLI command implementations

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpConfig, HttpServer};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file is not an error: every field has a default, so the
    /// server can start with no configuration at all.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            CliError::config(format!("invalid config {}: {}", path.display(), e))
        })
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Start the HTTP server
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port_override {
        config.http.port = port;
    }

    let server = HttpServer::with_config(config.http);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server(format!("HTTP server failed: {}", e)))
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("booklib.json");
        fs::write(
            &path,
            json!({"http": {"host": "0.0.0.0", "port": 4000}}).to_string(),
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 4000);
    }

    #[test]
    fn test_malformed_config_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("booklib.json");
        fs::write(&path, "{not json").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
