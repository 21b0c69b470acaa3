//! Data models for color definitions and asset catalog documents.
//!
//! Models are independent of the filesystem; the generators own all I/O.

pub mod asset_document;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use asset_document::{Appearance, AssetInfo, ColorAssetDocument, ColorEntry, ColorValue};
pub use palette::{ColorDef, Palette};
pub use rgb::{hex_to_srgb, HexColorError, RgbColor, SrgbComponents};
