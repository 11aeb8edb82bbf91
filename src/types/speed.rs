//! Animation speed for dynamic scenes.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Animation speed for dynamic scenes, with valid values from 1 to 200.
///
/// Speed only affects scenes with animation (like Party, Ocean, etc.).
/// A value of 100 is the default speed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Speed {
    pub(crate) value: u8,
}

impl Speed {
    const MIN: u8 = 1;
    const MAX: u8 = 200;
    const DEFAULT: u8 = 100;

    /// Create a new Speed with the default value (100).
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Speed;
    ///
    /// assert_eq!(Speed::new().value(), 100);
    /// ```
    pub fn new() -> Self {
        Speed {
            value: Self::DEFAULT,
        }
    }

    /// Get the speed value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Create a new Speed with the given value.
    ///
    /// Returns `None` if value is outside the valid range (1-200).
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Speed;
    ///
    /// assert!(Speed::create(0).is_none());
    /// assert!(Speed::create(1).is_some());
    /// assert!(Speed::create(200).is_some());
    /// assert!(Speed::create(201).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Speed { value })
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for Speed {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Self::create(value).ok_or(Error::InvalidSpeed(value))
    }
}
