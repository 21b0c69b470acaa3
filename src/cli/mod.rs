//! CLI command handlers for cvgen.
//!
//! Each subcommand wraps one library operation and maps its errors to an
//! exit code (see [`common::ExitCode`]).

pub mod assets;
pub mod colors;
pub mod common;
pub mod config;
pub mod convert;
pub mod generate;
pub mod scaffold;

// Re-export types used by main.rs and tests
pub use assets::AssetsArgs;
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use generate::GenerateArgs;
pub use scaffold::ScaffoldArgs;

use crate::config::Config;
use crate::models::Palette;
use std::path::Path;

/// Loads the user config. A malformed file is bad input; a failed read is an I/O error.
pub(crate) fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::from_generator("Failed to load configuration", &e))
}

/// Loads the palette at `path`, or the built-in one when `path` is `None`.
pub(crate) fn load_palette(path: Option<&Path>) -> CliResult<Palette> {
    match path {
        Some(path) => Palette::from_file(path)
            .map_err(|e| CliError::from_generator("Failed to load palette", &e)),
        None => Palette::load()
            .map_err(|e| CliError::validation(format!("Failed to load built-in palette: {e:#}"))),
    }
}
