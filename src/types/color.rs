//! RGB colors, hex codes and named colors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::Error;

/// Built-in color names, matched without regard to case.
const NAMED_COLORS: [(&str, Color); 10] = [
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("white", Color::rgb(255, 255, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("orange", Color::rgb(255, 128, 0)),
    ("purple", Color::rgb(128, 0, 255)),
    ("pink", Color::rgb(255, 105, 180)),
];

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Parse a 6 digit hex code, with or without a leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Color;
    ///
    /// let color = Color::from_hex("FF8000").unwrap();
    /// assert_eq!((color.red(), color.green(), color.blue()), (255, 128, 0));
    /// assert_eq!(Color::from_hex("#0a0B0c").unwrap(), Color::rgb(10, 11, 12));
    /// assert!(Color::from_hex("FF80").is_err());
    /// assert!(Color::from_hex("GG8000").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        if !is_hex_code(hex) {
            return Err(Error::InvalidHexColor(hex.to_string()));
        }
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidHexColor(hex.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Look up a color by name in the built-in table.
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Color;
    ///
    /// assert_eq!(Color::from_name("Red").unwrap(), Color::rgb(255, 0, 0));
    /// assert!(Color::from_name("chartreuse").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, Error> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name.trim()))
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::UnknownColor(name.to_string()))
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a hex code or, failing that, a color name.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if is_hex_code(s) {
            Self::from_hex(s)
        } else {
            Self::from_name(s)
        }
    }
}

/// The ways a caller can ask for a color.
///
/// Exactly one form is used per request. With [`ColorSpec::Rgb`] only the
/// supplied channels are sent; the bulb keeps its current value for the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// Six hex digits, e.g. `"FF8000"` or `"#ff8000"`.
    Hex(String),
    /// A name from the built-in color table.
    Named(String),
    /// Individual channels.
    Rgb {
        red: Option<u8>,
        green: Option<u8>,
        blue: Option<u8>,
    },
}

impl ColorSpec {
    /// All three channels set.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        ColorSpec::Rgb {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
        }
    }

    /// Resolve to per-channel values, failing on malformed hex or an
    /// unknown name.
    pub(crate) fn channels(&self) -> Result<(Option<u8>, Option<u8>, Option<u8>), Error> {
        let color = match self {
            ColorSpec::Hex(hex) => Color::from_hex(hex)?,
            ColorSpec::Named(name) => Color::from_name(name)?,
            ColorSpec::Rgb { red, green, blue } => return Ok((*red, *green, *blue)),
        };
        Ok((Some(color.red), Some(color.green), Some(color.blue)))
    }
}

impl FromStr for ColorSpec {
    type Err = Error;

    /// Six hex digits become [`ColorSpec::Hex`], anything else
    /// [`ColorSpec::Named`]. Either way the value must resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use wizard_rs::ColorSpec;
    ///
    /// assert_eq!(ColorSpec::from_str("#00FF7f").unwrap(), ColorSpec::Hex("#00FF7f".into()));
    /// assert_eq!(ColorSpec::from_str("Orange").unwrap(), ColorSpec::Named("Orange".into()));
    /// assert!(ColorSpec::from_str("FF00").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let spec = if is_hex_code(s) {
            ColorSpec::Hex(s.to_string())
        } else {
            ColorSpec::Named(s.to_string())
        };
        spec.channels()?;
        Ok(spec)
    }
}

/// Six hex digits, optionally after a `#`.
fn is_hex_code(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels_match_bytes() {
        for (hex, expected) in [
            ("000000", (0, 0, 0)),
            ("FFFFFF", (255, 255, 255)),
            ("ff8000", (255, 128, 0)),
            ("12aB9f", (0x12, 0xab, 0x9f)),
        ] {
            let color = Color::from_hex(hex).unwrap();
            assert_eq!((color.red, color.green, color.blue), expected, "{hex}");
        }
    }

    #[test]
    fn test_hex_rejects_malformed() {
        for hex in ["", "FFF", "FF80000", "FF80 0", "#FF80", "+1FFFF", "ééé"] {
            assert!(Color::from_hex(hex).is_err(), "{hex:?} should be rejected");
        }
    }

    #[test]
    fn test_from_str_prefers_hex_then_name() {
        assert_eq!(Color::from_str("00ff00").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_str("blue").unwrap(), Color::rgb(0, 0, 255));
        assert!(Color::from_str("bleu").is_err());
    }

    #[test]
    fn test_partial_rgb_keeps_missing_channels_unset() {
        let spec = ColorSpec::Rgb {
            red: Some(10),
            green: None,
            blue: Some(30),
        };
        assert_eq!(spec.channels().unwrap(), (Some(10), None, Some(30)));
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let spec = ColorSpec::Named("ultraviolet".into());
        assert_eq!(
            spec.channels().unwrap_err(),
            Error::UnknownColor("ultraviolet".into())
        );
    }
}
