//! Named color definitions that drive asset catalog generation.
//!
//! The built-in palette is embedded from `src/data/colors.json`. A palette file
//! with the same shape can be loaded instead.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};

/// A single named color with light and dark appearance values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDef {
    /// Asset name, also the `.colorset` directory stem (e.g., "AccentBlue").
    pub name: String,
    /// Light appearance as `#RRGGBB`.
    pub light: String,
    /// Dark appearance as `#RRGGBB`.
    pub dark: String,
}

impl ColorDef {
    /// Creates a color definition.
    pub fn new(name: impl Into<String>, light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Directory name for this color inside an asset catalog.
    #[must_use]
    pub fn colorset_dir_name(&self) -> String {
        format!("{}.colorset", self.name)
    }
}

/// An ordered list of color definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Colors in generation order.
    pub colors: Vec<ColorDef>,
}

impl Palette {
    /// Load the built-in palette from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/colors.json");
        let palette: Self =
            serde_json::from_str(json_data).context("Failed to parse built-in color palette")?;
        Ok(palette)
    }

    /// Load a palette from a JSON file and validate its color names.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file: {}", path.display()))?;

        let palette: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse palette file: {}", path.display()))?;

        palette.validate()?;
        Ok(palette)
    }

    /// Ensures every color name is non-empty, unique, and usable as a single
    /// directory name inside the output folder.
    ///
    /// Hex values are not checked here; they fail when converted.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for color in &self.colors {
            if color.name.trim().is_empty() {
                anyhow::bail!("Palette contains a color with an empty name");
            }
            if !is_single_path_component(&color.name) {
                anyhow::bail!(
                    "Color name '{}' must be a plain directory name (no '/', '\\' or '..')",
                    color.name
                );
            }
            if !seen.insert(color.name.as_str()) {
                anyhow::bail!("Duplicate color name in palette: '{}'", color.name);
            }
        }
        Ok(())
    }

    /// Get the number of colors.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Find a color by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ColorDef> {
        self.colors.iter().find(|c| c.name == name)
    }
}

/// True when `name` resolves to exactly one normal path component.
fn is_single_path_component(name: &str) -> bool {
    if name.contains(['/', '\\']) || name.contains("..") {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
