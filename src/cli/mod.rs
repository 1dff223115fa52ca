//! Command-line interface
//!
//! One command for now: `serve` loads the JSON configuration file and runs
//! the HTTP server. All logic lives here; main.rs only prints errors and
//! sets the exit code.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
