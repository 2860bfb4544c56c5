//! CLI module for rosterd
//!
//! Provides the command-line interface:
//! - serve: Load configuration, connect the pool, and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
