//! Brightness control for WiZ lights.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Brightness level from 0 to 100 percent.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MAX: u8 = 100;

    /// Full brightness.
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is above 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Brightness;
    ///
    /// assert!(Brightness::create(0).is_some());
    /// assert!(Brightness::create(100).is_some());
    /// assert!(Brightness::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Brightness { value })
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for Brightness {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Self::create(value).ok_or(Error::InvalidBrightness(value))
    }
}
