//! The bulb's configuration snapshot.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ProtocolError;
use crate::payload::Payload;
use crate::types::SceneMode;

/// Last known state of a bulb.
///
/// Every field is optional: the bulb leaves out whatever does not apply to
/// its current mode (no `temp` while showing an RGB color, no `sceneId`
/// outside a scene, and so on). `None` means "not applicable", never zero.
#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
pub struct Configuration {
    power: Option<bool>,
    scene_id: Option<u16>,
    red: Option<u8>,
    green: Option<u8>,
    blue: Option<u8>,
    speed: Option<u8>,
    temp: Option<u16>,
    brightness: Option<u8>,
}

impl Configuration {
    /// Build a configuration from the `result` object of a `getPilot` reply.
    ///
    /// Keys the bulb did not report stay `None`; keys we do not know about
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use wizard_rs::Configuration;
    ///
    /// let config = Configuration::from_status_result(&json!({
    ///     "mac": "a8bb50aabbcc",
    ///     "state": true,
    ///     "temp": 2700,
    /// }))
    /// .unwrap();
    /// assert_eq!(config.power(), Some(true));
    /// assert_eq!(config.temp(), Some(2700));
    /// assert_eq!(config.brightness(), None);
    /// ```
    pub fn from_status_result(result: &Value) -> Result<Self, ProtocolError> {
        let reported = Payload::deserialize(result).map_err(ProtocolError::MalformedJson)?;
        Ok(Configuration::from(&reported))
    }

    /// Overwrite the fields present in `update`, leaving the rest as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::{Brightness, Configuration, Payload};
    ///
    /// let mut config = Configuration::default();
    /// config.merge(&Payload::from(&Brightness::create(40).unwrap()));
    /// assert_eq!(config.brightness(), Some(40));
    /// assert_eq!(config.power(), None);
    /// ```
    pub fn merge(&mut self, update: &Payload) {
        if let Some(state) = update.state {
            self.power = Some(state);
        }
        if let Some(scene) = update.scene {
            self.scene_id = Some(scene);
        }
        if let Some(red) = update.red {
            self.red = Some(red);
        }
        if let Some(green) = update.green {
            self.green = Some(green);
        }
        if let Some(blue) = update.blue {
            self.blue = Some(blue);
        }
        if let Some(speed) = update.speed {
            self.speed = Some(speed);
        }
        if let Some(temp) = update.temp {
            self.temp = Some(temp);
        }
        if let Some(dimming) = update.dimming {
            self.brightness = Some(dimming);
        }
    }

    /// Like [`Configuration::merge`], returning the result as a new value.
    pub fn merged(&self, update: &Payload) -> Self {
        let mut next = self.clone();
        next.merge(update);
        next
    }

    /// Whether the bulb is on.
    pub fn power(&self) -> Option<bool> {
        self.power
    }

    pub fn scene_id(&self) -> Option<u16> {
        self.scene_id
    }

    /// The active scene, if its id is in the catalog.
    pub fn scene(&self) -> Option<SceneMode> {
        self.scene_id.and_then(SceneMode::create)
    }

    pub fn red(&self) -> Option<u8> {
        self.red
    }

    pub fn green(&self) -> Option<u8> {
        self.green
    }

    pub fn blue(&self) -> Option<u8> {
        self.blue
    }

    pub fn speed(&self) -> Option<u8> {
        self.speed
    }

    /// Color temperature in Kelvin.
    pub fn temp(&self) -> Option<u16> {
        self.temp
    }

    /// Brightness in percent.
    pub fn brightness(&self) -> Option<u8> {
        self.brightness
    }
}

impl From<&Payload> for Configuration {
    fn from(payload: &Payload) -> Self {
        Configuration {
            power: payload.state,
            scene_id: payload.scene,
            red: payload.red,
            green: payload.green,
            blue: payload.blue,
            speed: payload.speed,
            temp: payload.temp,
            brightness: payload.dimming,
        }
    }
}
