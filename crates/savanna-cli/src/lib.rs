//! Savanna Historian CLI library.
//!
//! Loads historical texts and configuration from disk, runs the analyzer,
//! and formats its results for the terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::Formatter;
