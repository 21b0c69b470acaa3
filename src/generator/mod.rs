//! File generators.
//!
//! Both generators are single linear passes: ensure directories, then write
//! files, stopping at the first error. Nothing is rolled back.

pub mod assets;
pub mod scaffold;

pub use assets::{build_document, generate_color_assets, generate_color_assets_from, AssetReport};
pub use scaffold::{generate_scaffold, ScaffoldReport};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Creates `path` and any missing ancestors. Succeeds if it already exists.
pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "ensured directory");
    Ok(())
}

/// Writes `content` to `path`, truncating any existing file.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
