//! Color temperature control.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Color temperature in Kelvin, with valid values from 2700K to 6500K.
///
/// Lower values produce warmer (more yellow/orange) light, while higher
/// values produce cooler (more blue) light. The presets are:
/// - 2700K: `warm`
/// - 4000K: `neutral`
/// - 6500K: `cool`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Kelvin {
    pub(crate) kelvin: u16,
}

impl Kelvin {
    const MIN: u16 = 2700;
    const MAX: u16 = 6500;

    pub const WARM: Kelvin = Kelvin { kelvin: 2700 };
    pub const NEUTRAL: Kelvin = Kelvin { kelvin: 4000 };
    pub const COOL: Kelvin = Kelvin { kelvin: 6500 };

    /// Get the kelvin value.
    pub fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Create a new Kelvin with the given value.
    ///
    /// Returns `None` if value is outside the valid range (2700-6500).
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Kelvin;
    ///
    /// assert!(Kelvin::create(2699).is_none());
    /// assert!(Kelvin::create(2700).is_some());
    /// assert!(Kelvin::create(6500).is_some());
    /// assert!(Kelvin::create(6501).is_none());
    /// ```
    pub fn create(kelvin: u16) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&kelvin)
            .then_some(Kelvin { kelvin })
    }

    /// Look up a named preset, ignoring case.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "warm" => Some(Self::WARM),
            "neutral" => Some(Self::NEUTRAL),
            "cool" => Some(Self::COOL),
            _ => None,
        }
    }
}

impl FromStr for Kelvin {
    type Err = Error;

    /// Parse a preset name or a plain number of Kelvin.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use wizard_rs::Kelvin;
    ///
    /// assert_eq!(Kelvin::from_str("Warm").unwrap().kelvin(), 2700);
    /// assert_eq!(Kelvin::from_str("5000").unwrap().kelvin(), 5000);
    /// assert!(Kelvin::from_str("9000").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        Self::preset(s)
            .or_else(|| s.parse().ok().and_then(Self::create))
            .ok_or_else(|| Error::InvalidTemperature(s.to_string()))
    }
}
