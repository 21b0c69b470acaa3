//! Colors command: list the palette that `assets` would generate.

use crate::cli::common::{CliError, CliResult};
use crate::cli::{load_config, load_palette};
use clap::Args;
use std::path::PathBuf;

/// List palette colors with their light and dark values
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Palette JSON file to list instead of the built-in colors
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let palette_path = match &self.palette {
            Some(path) => Some(path.clone()),
            None => load_config()?.paths.palette,
        };
        let palette = load_palette(palette_path.as_deref())?;

        if self.json {
            let json = serde_json::to_string_pretty(&palette)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        let width = palette
            .colors
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0);

        println!("{:width$}  LIGHT    DARK", "NAME");
        for color in &palette.colors {
            println!("{:width$}  {}  {}", color.name, color.light, color.dark);
        }

        Ok(())
    }
}
