//! RGB color handling with hex parsing and sRGB component formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Alpha component written for every asset color. Asset colors are always opaque.
pub const OPAQUE_ALPHA: &str = "1.000";

/// Error produced when a string is not a `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexColorError {
    /// The input is not exactly `#` followed by six hex digits.
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
        /// Short description of what is wrong with it.
        reason: &'static str,
    },
}

impl HexColorError {
    fn invalid(input: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a `#RRGGBB` hex string (either case).
    ///
    /// # Examples
    ///
    /// ```
    /// use cvgen::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#007AFF").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 122, 255));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError::InvalidFormat`] if the leading `#` is missing,
    /// the length is not 7, or any digit is not hexadecimal.
    pub fn from_hex(input: &str) -> Result<Self, HexColorError> {
        let Some(digits) = input.strip_prefix('#') else {
            return Err(HexColorError::invalid(input, "expected a leading '#'"));
        };

        if digits.len() != 6 {
            return Err(HexColorError::invalid(
                input,
                "expected 6 hex digits (#RRGGBB)",
            ));
        }

        // from_str_radix accepts a leading '+', so check the digits up front
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexColorError::invalid(input, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| HexColorError::invalid(input, "contains non-hex characters"))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Scales each channel to 0.0-1.0 and formats it with three decimals.
    ///
    /// ```
    /// use cvgen::models::RgbColor;
    ///
    /// let srgb = RgbColor::new(0, 122, 255).to_srgb();
    /// assert_eq!(srgb.green, "0.478");
    /// assert_eq!(srgb.alpha, "1.000");
    /// ```
    #[must_use]
    pub fn to_srgb(&self) -> SrgbComponents {
        SrgbComponents {
            red: format_channel(self.r),
            green: format_channel(self.g),
            blue: format_channel(self.b),
            alpha: OPAQUE_ALPHA.to_string(),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn format_channel(value: u8) -> String {
    format!("{:.3}", f64::from(value) / 255.0)
}

/// Normalized sRGB components as they appear in an asset catalog.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrgbComponents {
    /// Red, "0.000" to "1.000"
    pub red: String,
    /// Green, "0.000" to "1.000"
    pub green: String,
    /// Blue, "0.000" to "1.000"
    pub blue: String,
    /// Always "1.000"
    pub alpha: String,
}

/// Converts a `#RRGGBB` string straight to sRGB component strings.
///
/// # Errors
///
/// Returns [`HexColorError::InvalidFormat`] for malformed input.
pub fn hex_to_srgb(hex: &str) -> Result<SrgbComponents, HexColorError> {
    RgbColor::from_hex(hex).map(|color| color.to_srgb())
}
