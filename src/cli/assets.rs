//! Assets command for Xcode color catalogs.

use crate::cli::common::{CliError, CliResult};
use crate::cli::{load_config, load_palette};
use crate::generator::generate_color_assets_from;
use clap::Args;
use std::path::PathBuf;

/// Generate `<Name>.colorset/Contents.json` for every palette color
#[derive(Debug, Clone, Args)]
pub struct AssetsArgs {
    /// Asset catalog folder to write colorsets into
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Palette JSON file to use instead of the built-in colors
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,
}

impl AssetsArgs {
    /// Execute the assets command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let out_dir = self
            .out_dir
            .clone()
            .unwrap_or_else(|| config.paths.assets_dir.clone());
        let palette_path = self.palette.clone().or(config.paths.palette);

        let palette = load_palette(palette_path.as_deref())?;

        let report = generate_color_assets_from(&out_dir, &palette)
            .map_err(|e| CliError::from_generator("Asset generation failed", &e))?;

        println!("✓ Generated {} colorsets", report.colorsets.len());
        for name in &report.colorsets {
            println!("  {name}.colorset");
        }
        println!("  Output: {}", report.output_dir.display());

        Ok(())
    }
}
