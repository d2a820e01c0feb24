//! RGBA color with hex-string serialization.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Color value in RGBA format.
///
/// Serializes to and from `#rrggbb` / `#rrggbbaa` hex strings so palette
/// JSON stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::InvalidFormat(s.to_string()))?;

        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidFormat(s.to_string()));
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
        };

        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
            a: if hex.len() == 8 { byte(6..8)? } else { 255 },
        })
    }

    /// Format as a hex string, omitting the alpha channel when opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, Error)]
pub enum ColorParseError {
    #[error("Invalid color format: {0}. Expected '#rrggbb' or '#rrggbbaa'")]
    InvalidFormat(String),

    #[error("Invalid hex digits in color: {0}")]
    InvalidHex(String),
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_opaque() {
        let color = Color::from_hex("#ffa07a").unwrap();
        assert_eq!(color, Color::rgb(255, 160, 122));
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let color = Color::from_hex("#00000080").unwrap();
        assert_eq!(color, Color::new(0, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("ffa07a").is_err()); // missing '#'
        assert!(Color::from_hex("#ffa0").is_err()); // wrong length
        assert!(Color::from_hex("#zzzzzz").is_err()); // not hex
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#aad3df", "#12345678"] {
            let color = Color::from_hex(hex).unwrap();
            assert_eq!(color.to_hex(), hex);
        }
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(170, 211, 223)).unwrap();
        assert_eq!(json, "\"#aad3df\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(170, 211, 223));
    }
}
