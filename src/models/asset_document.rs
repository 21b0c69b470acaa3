//! `Contents.json` document model for Xcode `.colorset` folders.
//!
//! Struct field order is the serialized key order, which asset catalog tooling
//! relies on. Do not reorder fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::rgb::SrgbComponents;

/// Indentation used for every generated `Contents.json`.
const JSON_INDENT: &[u8] = b"    ";

/// Top-level `Contents.json` for a color set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssetDocument {
    /// Catalog metadata.
    pub info: AssetInfo,
    /// Light entry followed by the dark entry.
    pub colors: Vec<ColorEntry>,
}

/// The `info` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Format version, always 1.
    pub version: u32,
    /// Always "xcode".
    pub author: String,
}

impl Default for AssetInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

/// One entry of the `colors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Platform variant, always "universal".
    pub idiom: String,
    /// Color value.
    pub color: ColorValue,
    /// Conditions under which this entry applies; absent for the default entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<Appearance>>,
}

/// Color space and components of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    /// Always "srgb".
    #[serde(rename = "color-space")]
    pub color_space: String,
    /// Normalized components.
    pub components: SrgbComponents,
}

/// Appearance condition, e.g. luminosity = dark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    /// Appearance axis ("luminosity").
    pub appearance: String,
    /// Axis value ("dark").
    pub value: String,
}

impl Appearance {
    /// The dark-mode condition.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            appearance: "luminosity".to_string(),
            value: "dark".to_string(),
        }
    }
}

impl ColorEntry {
    fn universal(components: SrgbComponents, appearances: Option<Vec<Appearance>>) -> Self {
        Self {
            idiom: "universal".to_string(),
            color: ColorValue {
                color_space: "srgb".to_string(),
                components,
            },
            appearances,
        }
    }
}

impl ColorAssetDocument {
    /// Builds a document with a default (light) entry and a dark-mode entry.
    #[must_use]
    pub fn new(light: SrgbComponents, dark: SrgbComponents) -> Self {
        Self {
            info: AssetInfo::default(),
            colors: vec![
                ColorEntry::universal(light, None),
                ColorEntry::universal(dark, Some(vec![Appearance::dark()])),
            ],
        }
    }

    /// Serializes with 4-space indentation and no trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize color asset document")?;
        String::from_utf8(buf).context("Serialized color asset document is not UTF-8")
    }

    /// Parses a document previously written by [`Self::to_json_string`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse color asset document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rgb::hex_to_srgb;

    const EXPECTED_ACCENT_BLUE: &str = r#"{
    "info": {
        "version": 1,
        "author": "xcode"
    },
    "colors": [
        {
            "idiom": "universal",
            "color": {
                "color-space": "srgb",
                "components": {
                    "red": "0.000",
                    "green": "0.478",
                    "blue": "1.000",
                    "alpha": "1.000"
                }
            }
        },
        {
            "idiom": "universal",
            "color": {
                "color-space": "srgb",
                "components": {
                    "red": "0.392",
                    "green": "0.824",
                    "blue": "1.000",
                    "alpha": "1.000"
                }
            },
            "appearances": [
                {
                    "appearance": "luminosity",
                    "value": "dark"
                }
            ]
        }
    ]
}"#;

    fn accent_blue() -> ColorAssetDocument {
        ColorAssetDocument::new(
            hex_to_srgb("#007AFF").unwrap(),
            hex_to_srgb("#64D2FF").unwrap(),
        )
    }

    #[test]
    fn test_serializes_exact_layout() {
        let json = accent_blue().to_json_string().unwrap();
        assert_eq!(json, EXPECTED_ACCENT_BLUE);
    }

    #[test]
    fn test_entries_differ_only_in_components_and_appearances() {
        let doc = accent_blue();
        assert_eq!(doc.colors.len(), 2);

        let light = &doc.colors[0];
        let dark = &doc.colors[1];
        assert_eq!(light.idiom, dark.idiom);
        assert_eq!(light.color.color_space, dark.color.color_space);
        assert!(light.appearances.is_none());
        assert_eq!(dark.appearances, Some(vec![Appearance::dark()]));
    }

    #[test]
    fn test_reserialize_is_byte_identical() {
        let first = accent_blue().to_json_string().unwrap();
        let parsed = ColorAssetDocument::from_json_str(&first).unwrap();
        let second = parsed.to_json_string().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_trailing_newline() {
        let json = accent_blue().to_json_string().unwrap();
        assert!(json.ends_with('}'));
    }
}
