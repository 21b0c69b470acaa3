//! Xcode color asset catalog generation.
//!
//! Each palette color becomes `<Name>.colorset/Contents.json` with a default
//! (light) entry and a dark-appearance entry.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{ensure_dir, write_file};
use crate::models::{hex_to_srgb, ColorAssetDocument, ColorDef, HexColorError, Palette};

/// File name written inside every `.colorset` directory.
pub const CONTENTS_FILE_NAME: &str = "Contents.json";

/// What an asset run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReport {
    /// Catalog directory the colorsets were written into.
    pub output_dir: PathBuf,
    /// Color names, in generation order.
    pub colorsets: Vec<String>,
    /// `Contents.json` paths written, in generation order.
    pub files: Vec<PathBuf>,
}

/// Builds the `Contents.json` document for one color.
///
/// # Errors
///
/// Returns [`HexColorError`] if either the light or dark value is malformed.
pub fn build_document(color: &ColorDef) -> Result<ColorAssetDocument, HexColorError> {
    let light = hex_to_srgb(&color.light)?;
    let dark = hex_to_srgb(&color.dark)?;
    Ok(ColorAssetDocument::new(light, dark))
}

/// Generates colorsets for the built-in palette into `output_dir`.
pub fn generate_color_assets(output_dir: &Path) -> Result<AssetReport> {
    let palette = Palette::load()?;
    generate_color_assets_from(output_dir, &palette)
}

/// Generates colorsets for `palette` into `output_dir`.
///
/// Colors are processed in order. A malformed hex value aborts the run before
/// that color's directory or file is touched; colors already written stay.
/// The underlying [`HexColorError`] can be recovered with
/// `err.downcast_ref::<HexColorError>()`.
///
/// # Errors
///
/// Returns an error on duplicate names, malformed hex values, or any
/// filesystem failure.
pub fn generate_color_assets_from(output_dir: &Path, palette: &Palette) -> Result<AssetReport> {
    palette.validate()?;
    ensure_dir(output_dir)?;

    let mut report = AssetReport {
        output_dir: output_dir.to_path_buf(),
        ..AssetReport::default()
    };

    for color in &palette.colors {
        let document = build_document(color)
            .with_context(|| format!("Failed to convert color '{}'", color.name))?;
        let json = document.to_json_string()?;

        let colorset_dir = output_dir.join(color.colorset_dir_name());
        ensure_dir(&colorset_dir)?;

        let contents_path = colorset_dir.join(CONTENTS_FILE_NAME);
        write_file(&contents_path, &json)?;

        report.colorsets.push(color.name.clone());
        report.files.push(contents_path);
    }

    info!(
        output_dir = %output_dir.display(),
        colorsets = report.colorsets.len(),
        "generated color assets"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appearance;
    use std::fs;
    use tempfile::TempDir;

    fn read_document(dir: &Path, name: &str) -> ColorAssetDocument {
        let path = dir.join(format!("{name}.colorset")).join(CONTENTS_FILE_NAME);
        let json = fs::read_to_string(&path).unwrap();
        ColorAssetDocument::from_json_str(&json).unwrap()
    }

    #[test]
    fn test_generates_all_builtin_colorsets() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("Colors");

        let report = generate_color_assets(&out).unwrap();
        assert_eq!(report.colorsets.len(), 8);

        for name in &report.colorsets {
            let doc = read_document(&out, name);
            assert_eq!(doc.colors.len(), 2);
            assert!(doc.colors[0].appearances.is_none());
            assert_eq!(doc.colors[1].appearances, Some(vec![Appearance::dark()]));
        }
    }

    #[test]
    fn test_written_json_is_valid_and_has_expected_keys() {
        let temp_dir = TempDir::new().unwrap();
        generate_color_assets(temp_dir.path()).unwrap();

        let json = fs::read_to_string(
            temp_dir
                .path()
                .join("CardBackground.colorset")
                .join(CONTENTS_FILE_NAME),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["info"]["version"], 1);
        assert_eq!(value["info"]["author"], "xcode");
        assert_eq!(value["colors"][0]["color"]["color-space"], "srgb");
        assert_eq!(value["colors"][0]["color"]["components"]["red"], "1.000");
        assert_eq!(value["colors"][1]["color"]["components"]["red"], "0.173");
        assert!(value["colors"][0].get("appearances").is_none());
    }

    #[test]
    fn test_written_json_reserializes_identically() {
        let temp_dir = TempDir::new().unwrap();
        let report = generate_color_assets(temp_dir.path()).unwrap();

        for path in &report.files {
            let written = fs::read_to_string(path).unwrap();
            let reparsed = ColorAssetDocument::from_json_str(&written).unwrap();
            assert_eq!(reparsed.to_json_string().unwrap(), written);
        }
    }

    #[test]
    fn test_rerun_overwrites_with_same_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir
            .path()
            .join("Divider.colorset")
            .join(CONTENTS_FILE_NAME);

        generate_color_assets(temp_dir.path()).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        fs::write(&path, "garbage").unwrap();
        generate_color_assets(temp_dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_malformed_hex_aborts_before_that_color() {
        let temp_dir = TempDir::new().unwrap();
        let palette = Palette {
            colors: vec![
                ColorDef::new("Good", "#FFFFFF", "#000000"),
                ColorDef::new("Bad", "#ZZZZZZ", "#000000"),
                ColorDef::new("Later", "#123456", "#654321"),
            ],
        };

        let err = generate_color_assets_from(temp_dir.path(), &palette).unwrap_err();

        let hex_err = err
            .downcast_ref::<HexColorError>()
            .expect("should carry a HexColorError");
        assert!(matches!(hex_err, HexColorError::InvalidFormat { input, .. } if input == "#ZZZZZZ"));

        assert!(temp_dir.path().join("Good.colorset").join(CONTENTS_FILE_NAME).exists());
        assert!(!temp_dir.path().join("Bad.colorset").join(CONTENTS_FILE_NAME).exists());
        assert!(!temp_dir.path().join("Later.colorset").exists());
    }

    #[test]
    fn test_short_dark_hex_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let palette = Palette {
            colors: vec![ColorDef::new("Short", "#FFFFFF", "#FFFFF")],
        };

        let err = generate_color_assets_from(temp_dir.path(), &palette).unwrap_err();
        assert!(err.to_string().contains("Short"));
        assert!(!temp_dir.path().join("Short.colorset").join(CONTENTS_FILE_NAME).exists());
    }

    #[test]
    fn test_duplicate_names_rejected_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("Colors");
        let palette = Palette {
            colors: vec![
                ColorDef::new("Twice", "#FFFFFF", "#000000"),
                ColorDef::new("Twice", "#000000", "#FFFFFF"),
            ],
        };

        assert!(generate_color_assets_from(&out, &palette).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_path_like_name_never_escapes_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("Colors");
        let palette = Palette {
            colors: vec![ColorDef::new("../Escaped", "#FFFFFF", "#000000")],
        };

        let err = generate_color_assets_from(&out, &palette).unwrap_err();
        assert!(err.to_string().contains("must be a plain directory name"));
        assert!(!temp_dir.path().join("Escaped.colorset").exists());
        assert!(!out.exists());
    }

    #[test]
    fn test_build_document_uses_light_then_dark() {
        let doc = build_document(&ColorDef::new("Mono", "#FFFFFF", "#000000")).unwrap();
        assert_eq!(doc.colors[0].color.components.red, "1.000");
        assert_eq!(doc.colors[1].color.components.red, "0.000");
    }
}
