//! Parameter set carried by `setPilot` and reported by `getPilot`.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{Brightness, Color, ColorSpec, Kelvin, SceneMode, Speed};

/// A set of bulb parameters keyed by their wire names.
///
/// The key set is closed: `state`, `sceneId`, `r`, `g`, `b`, `speed`, `temp`
/// and `dimming`. Unset keys are left out of the encoded JSON entirely, so
/// the bulb keeps its current value for them.
///
/// # Creating Payloads
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use wizard_rs::{Payload, SceneMode};
///    let payload = Payload::from(&SceneMode::Sunset);
///    assert_eq!(payload.scene_id(), Some(3));
///    ```
///
/// 2. **Builder style** for combining attributes:
///    ```
///    use wizard_rs::{Payload, Brightness, Color};
///    let mut payload = Payload::new();
///    payload.brightness(&Brightness::create(80).unwrap());
///    payload.color(&Color::rgb(255, 128, 0));
///    assert_eq!(
///        serde_json::to_string(&payload).unwrap(),
///        r#"{"r":255,"g":128,"b":0,"dimming":80}"#
///    );
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Payload {
    pub(crate) state: Option<bool>,
    #[serde(rename = "sceneId")]
    pub(crate) scene: Option<u16>,
    #[serde(rename = "r")]
    pub(crate) red: Option<u8>,
    #[serde(rename = "g")]
    pub(crate) green: Option<u8>,
    #[serde(rename = "b")]
    pub(crate) blue: Option<u8>,
    pub(crate) speed: Option<u8>,
    pub(crate) temp: Option<u16>,
    pub(crate) dimming: Option<u8>,
}

impl Payload {
    /// Create a new empty payload.
    ///
    /// At least one attribute must be set for the payload to be sent.
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Payload;
    ///
    /// let payload = Payload::new();
    /// assert_eq!(payload.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this payload contains at least one attribute.
    pub fn is_valid(&self) -> bool {
        self.state.is_some()
            || self.scene.is_some()
            || self.red.is_some()
            || self.green.is_some()
            || self.blue.is_some()
            || self.speed.is_some()
            || self.temp.is_some()
            || self.dimming.is_some()
    }

    /// Set the power state.
    pub fn power(&mut self, on: bool) {
        self.state = Some(on);
    }

    /// Set the scene from the catalog.
    pub fn scene(&mut self, scene: &SceneMode) {
        self.scene = Some(scene.id());
    }

    /// Set a raw scene id, catalogued or not.
    pub fn raw_scene(&mut self, id: u16) {
        self.scene = Some(id);
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.dimming = Some(brightness.value);
    }

    /// Set the animation speed of the active scene.
    pub fn speed(&mut self, speed: &Speed) {
        self.speed = Some(speed.value);
    }

    pub fn temp(&mut self, temp: &Kelvin) {
        self.temp = Some(temp.kelvin);
    }

    /// Set all three RGB channels.
    pub fn color(&mut self, color: &Color) {
        self.red = Some(color.red);
        self.green = Some(color.green);
        self.blue = Some(color.blue);
    }

    /// Set the channels described by `spec`, leaving the others unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::{ColorSpec, Payload};
    ///
    /// let mut payload = Payload::new();
    /// payload
    ///     .color_spec(&ColorSpec::Rgb { red: Some(40), green: None, blue: None })
    ///     .unwrap();
    /// assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"r":40}"#);
    ///
    /// assert!(payload.color_spec(&ColorSpec::Hex("nope".into())).is_err());
    /// ```
    pub fn color_spec(&mut self, spec: &ColorSpec) -> Result<(), Error> {
        let (red, green, blue) = spec.channels()?;
        if red.is_none() && green.is_none() && blue.is_none() {
            return Err(Error::NoAttribute);
        }
        self.red = red.or(self.red);
        self.green = green.or(self.green);
        self.blue = blue.or(self.blue);
        Ok(())
    }

    pub fn state(&self) -> Option<bool> {
        self.state
    }

    pub fn scene_id(&self) -> Option<u16> {
        self.scene
    }

    pub fn dimming(&self) -> Option<u8> {
        self.dimming
    }
}

impl From<&SceneMode> for Payload {
    fn from(scene: &SceneMode) -> Self {
        let mut p = Payload::new();
        p.scene(scene);
        p
    }
}

impl From<&Kelvin> for Payload {
    fn from(kelvin: &Kelvin) -> Self {
        let mut p = Payload::new();
        p.temp(kelvin);
        p
    }
}

impl From<&Color> for Payload {
    fn from(color: &Color) -> Self {
        let mut p = Payload::new();
        p.color(color);
        p
    }
}

impl From<&Speed> for Payload {
    fn from(speed: &Speed) -> Self {
        let mut p = Payload::new();
        p.speed(speed);
        p
    }
}

impl From<&Brightness> for Payload {
    fn from(brightness: &Brightness) -> Self {
        let mut p = Payload::new();
        p.brightness(brightness);
        p
    }
}
