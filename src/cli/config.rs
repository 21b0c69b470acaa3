//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default base directory for the package scaffold
    #[arg(long, value_name = "DIR")]
    scaffold_dir: Option<PathBuf>,

    /// Default asset catalog folder for colorsets
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Palette JSON file to use instead of the built-in colors
    #[arg(long, value_name = "FILE")]
    palette: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    scaffold_dir: String,
    assets_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

fn config_file_path() -> CliResult<PathBuf> {
    Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate config directory: {e}")))
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let path = config_file_path()?;
        let config = Config::load_from(&path)
            .map_err(|e| CliError::from_generator("Failed to load configuration", &e))?;

        let output = ConfigOutput {
            config_file: path.display().to_string(),
            scaffold_dir: config.paths.scaffold_dir.display().to_string(),
            assets_dir: config.paths.assets_dir.display().to_string(),
            palette: config.paths.palette.as_ref().map(|p| p.display().to_string()),
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("Config file:   {}", output.config_file);
            println!("Scaffold dir:  {}", output.scaffold_dir);
            println!("Assets dir:    {}", output.assets_dir);
            println!(
                "Palette:       {}",
                output.palette.as_deref().unwrap_or("(built-in)")
            );
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.scaffold_dir.is_none() && self.assets_dir.is_none() && self.palette.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --scaffold-dir, --assets-dir, or --palette",
            ));
        }

        if let Some(palette) = &self.palette {
            if !palette.is_file() {
                return Err(CliError::validation(format!(
                    "Palette file does not exist: {}",
                    palette.display()
                )));
            }
        }

        let path = config_file_path()?;
        let mut config = Config::load_from(&path)
            .map_err(|e| CliError::from_generator("Failed to load configuration", &e))?;

        if let Some(dir) = &self.scaffold_dir {
            config.paths.scaffold_dir.clone_from(dir);
            println!("✓ Scaffold dir set to: {}", dir.display());
        }
        if let Some(dir) = &self.assets_dir {
            config.paths.assets_dir.clone_from(dir);
            println!("✓ Assets dir set to: {}", dir.display());
        }
        if let Some(palette) = &self.palette {
            config.paths.palette = Some(palette.clone());
            println!("✓ Palette set to: {}", palette.display());
        }

        config
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        Ok(())
    }
}
