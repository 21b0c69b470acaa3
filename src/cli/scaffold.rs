//! Scaffold command for the CVCore Swift package.

use crate::cli::common::{CliError, CliResult};
use crate::cli::load_config;
use crate::generator::generate_scaffold;
use clap::Args;
use std::path::PathBuf;

/// Create the CVCore package folders and placeholder files
#[derive(Debug, Clone, Args)]
pub struct ScaffoldArgs {
    /// Base directory for the package (defaults to config, then ./CVCore)
    #[arg(short, long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
}

impl ScaffoldArgs {
    /// Execute the scaffold command
    pub fn execute(&self) -> CliResult<()> {
        let base_dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => load_config()?.paths.scaffold_dir,
        };

        let report = generate_scaffold(&base_dir)
            .map_err(|e| CliError::from_generator("Scaffold failed", &e))?;

        println!(
            "✓ Scaffolded CVCore ({} folders, {} files)",
            report.directories.len(),
            report.files.len()
        );
        println!("  Output: {}", report.base_dir.display());

        Ok(())
    }
}
