//! RGBA color type
//!
//! [`Rgba`] is the value type flowing through the whole crate: sampled
//! pixels, whitelist entries and extracted palette colors are all `Rgba`.
//! Channels are 8-bit; equality is exact channel equality so the type can
//! key occurrence histograms.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Alpha values below this are treated as invisible.
///
/// Anything past the midpoint of the 8-bit alpha range no longer counts as
/// a visible pixel.
pub const ALPHA_VISIBILITY_THRESHOLD: u8 = 128;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] std::num::ParseIntError),
}

/// A color with 8-bit RGBA channels.
///
/// Values are exact: two colors are equal iff all four channels are equal,
/// which makes `Rgba` usable as a histogram key. The alpha channel is
/// carried so transparency-aware sampling can skip invisible pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a fully opaque color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether this pixel is invisible for sampling purposes.
    ///
    /// True when alpha is below [`ALPHA_VISIBILITY_THRESHOLD`].
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a < ALPHA_VISIBILITY_THRESHOLD
    }

    /// Format as a lowercase `#rrggbb` hex string (alpha is dropped).
    ///
    /// # Example
    /// ```
    /// use thumbsmith::Rgba;
    /// assert_eq!(Rgba::new(0xcc, 0x66, 0x33).to_hex(), "#cc6633");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<image::Rgba<u8>> for Rgba {
    #[inline]
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and leading/trailing whitespace is trimmed.
    /// Parsed colors are fully opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use thumbsmith::Rgba;
    ///
    /// let navy: Rgba = "#333399".parse().unwrap();
    /// assert_eq!(navy, Rgba::new(0x33, 0x33, 0x99));
    ///
    /// let red: Rgba = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgba::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Hex digits are ASCII; rejecting everything else up front keeps
        // the byte slicing below on char boundaries.
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgba = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Rgba::new(255, 255, 255));

        let black: Rgba = "#000000".parse().unwrap();
        assert_eq!(black, Rgba::new(0, 0, 0));

        let no_hash: Rgba = "cc6633".parse().unwrap();
        assert_eq!(no_hash, Rgba::new(0xcc, 0x66, 0x33));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let red: Rgba = "#f00".parse().unwrap();
        assert_eq!(red, Rgba::new(255, 0, 0));

        let color: Rgba = "#ABC".parse().unwrap();
        assert_eq!(color, Rgba::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgba>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgba>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "".parse::<Rgba>(),
            Err(ParseColorError::InvalidLength)
        ));
    }

    #[test]
    fn test_hex_parsing_non_ascii_is_an_error_not_a_panic() {
        // Multibyte chars must not trip the byte-indexed digit slicing.
        assert!("\u{e9}0".parse::<Rgba>().is_err());
        assert!("#\u{e9}\u{e9}\u{e9}".parse::<Rgba>().is_err());
        assert!("\u{e9}\u{e9}0000".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let a: Rgba = "  #AbCdEf  ".parse().unwrap();
        let b: Rgba = "#abcdef".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hex_round_trip() {
        let color: Rgba = "#cc6633".parse().unwrap();
        assert_eq!(color.to_hex(), "#cc6633");
    }

    #[test]
    fn test_transparency_threshold() {
        assert!(Rgba::with_alpha(0, 0, 0, 0).is_transparent());
        assert!(Rgba::with_alpha(0, 0, 0, 127).is_transparent());
        assert!(!Rgba::with_alpha(0, 0, 0, 128).is_transparent());
        assert!(!Rgba::new(0, 0, 0).is_transparent());
    }

    #[test]
    fn test_from_image_pixel() {
        let pixel = image::Rgba([10u8, 20, 30, 40]);
        assert_eq!(Rgba::from(pixel), Rgba::with_alpha(10, 20, 30, 40));
    }
}
