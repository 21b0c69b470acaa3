//! Generate command: scaffold plus color assets in one run.

use crate::cli::common::{CliError, CliResult};
use crate::cli::{load_config, load_palette};
use crate::generator::{generate_color_assets_from, generate_scaffold};
use clap::Args;
use std::path::PathBuf;

/// Run the scaffold and asset generators back to back
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Base directory for the package scaffold
    #[arg(long, value_name = "DIR")]
    pub scaffold_dir: Option<PathBuf>,

    /// Asset catalog folder for colorsets
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Palette JSON file to use instead of the built-in colors
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let scaffold_dir = self
            .scaffold_dir
            .clone()
            .unwrap_or(config.paths.scaffold_dir);
        let assets_dir = self.assets_dir.clone().unwrap_or(config.paths.assets_dir);
        let palette_path = self.palette.clone().or(config.paths.palette);

        // Bad palette input should stop us before anything is written
        let palette = load_palette(palette_path.as_deref())?;

        let scaffold = generate_scaffold(&scaffold_dir)
            .map_err(|e| CliError::from_generator("Scaffold failed", &e))?;
        let assets = generate_color_assets_from(&assets_dir, &palette)
            .map_err(|e| CliError::from_generator("Asset generation failed", &e))?;

        println!(
            "✓ Scaffolded CVCore ({} folders, {} files)",
            scaffold.directories.len(),
            scaffold.files.len()
        );
        println!("  Output: {}", scaffold.base_dir.display());
        println!("✓ Generated {} colorsets", assets.colorsets.len());
        println!("  Output: {}", assets.output_dir.display());

        Ok(())
    }
}
