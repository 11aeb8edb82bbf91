//! Individual light control.

use std::net::Ipv4Addr;

use log::{debug, warn};

use crate::config::Configuration;
use crate::errors::Error;
use crate::payload::Payload;
use crate::request::Request;
use crate::response::Response;
use crate::transport::{Transport, UdpTransport};
use crate::types::{Brightness, ColorSpec, Kelvin, SceneMode, Speed};

type Result<T> = std::result::Result<T, Error>;

/// A single WiZ bulb and the last configuration it reported.
///
/// Every mutating call sends one `setPilot` and, once the bulb accepts it,
/// folds the accepted parameters into the cached [`Configuration`]. A failed
/// call leaves the cache as it was.
///
/// One `Light` is meant to be driven by one task at a time; mutating methods
/// take `&mut self`.
///
/// # Example
///
/// ```ignore
/// use std::net::Ipv4Addr;
/// use wizard_rs::{ColorSpec, Light};
///
/// let mut light = Light::connect(Ipv4Addr::new(192, 168, 1, 100)).await?;
/// light.set_color(&ColorSpec::Hex("FF8000".into())).await?;
/// println!("{:?}", light.config());
/// ```
#[derive(Debug)]
pub struct Light<T: Transport = UdpTransport> {
    ip: Ipv4Addr,
    transport: T,
    config: Configuration,
}

impl Light<UdpTransport> {
    /// Open a socket to the bulb at `ip` and read its current state.
    ///
    /// Fails with [`Error::Connect`] if the socket cannot be opened, or with
    /// [`Error::Communication`] if the bulb does not answer the first status
    /// query.
    pub async fn connect(ip: Ipv4Addr) -> Result<Self> {
        let transport = UdpTransport::bind(ip).await?;
        Self::with_transport(ip, transport).await
    }
}

impl<T: Transport> Light<T> {
    /// Build a light over an existing transport and read its current state.
    pub async fn with_transport(ip: Ipv4Addr, transport: T) -> Result<Self> {
        let mut light = Light {
            ip,
            transport,
            config: Configuration::default(),
        };
        light.get_status().await?;
        Ok(light)
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    /// The cached configuration, as of the last successful call.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The scene catalog.
    pub fn list_scenes(&self) -> impl Iterator<Item = (String, u16)> {
        SceneMode::catalog()
    }

    /// Queries the bulb for its current state and replaces the cache with it.
    pub async fn get_status(&mut self) -> Result<&Configuration> {
        const OPERATION: &str = "getStatus";
        let reply = self.exchange(OPERATION, &Request::get_status()).await?;
        self.config = reply
            .status()
            .map_err(|e| Error::communication(OPERATION, &self.ip, e))?;
        Ok(&self.config)
    }

    pub async fn turn_on(&mut self) -> Result<()> {
        let mut payload = Payload::new();
        payload.power(true);
        self.set("turnOn", payload).await
    }

    pub async fn turn_off(&mut self) -> Result<()> {
        let mut payload = Payload::new();
        payload.power(false);
        self.set("turnOff", payload).await
    }

    /// Re-reads the power state from the bulb, then flips it.
    ///
    /// Two round-trips: the cache may be stale if something else changed the
    /// bulb since the last call.
    pub async fn toggle(&mut self) -> Result<()> {
        let on = self.get_status().await?.power().unwrap_or(false);
        if on {
            self.turn_off().await
        } else {
            self.turn_on().await
        }
    }

    /// Sets the color from a hex code, a color name or individual channels.
    pub async fn set_color(&mut self, color: &ColorSpec) -> Result<()> {
        let mut payload = Payload::new();
        payload.color_spec(color)?;
        self.set("setColor", payload).await
    }

    pub async fn set_brightness(&mut self, brightness: Brightness) -> Result<()> {
        self.set("setBrightness", Payload::from(&brightness)).await
    }

    pub async fn set_temperature(&mut self, kelvin: Kelvin) -> Result<()> {
        self.set("setTemperature", Payload::from(&kelvin)).await
    }

    pub async fn set_speed(&mut self, speed: Speed) -> Result<()> {
        self.set("setSpeed", Payload::from(&speed)).await
    }

    /// Sets a scene by name or id.
    ///
    /// A name that resolves in the catalog wins. Otherwise the literal `id`
    /// is sent as given; if there is no id either, nothing is sent.
    pub async fn set_scene(&mut self, id: Option<u16>, name: Option<&str>) -> Result<()> {
        let scene_id = resolve_scene(id, name)?;
        let mut payload = Payload::new();
        payload.raw_scene(scene_id);
        self.set("setScene", payload).await
    }

    pub async fn set_scene_by_name(&mut self, name: &str) -> Result<()> {
        self.set_scene(None, Some(name)).await
    }

    pub async fn set_scene_id(&mut self, id: u16) -> Result<()> {
        self.set_scene(Some(id), None).await
    }

    /// Applies an arbitrary parameter set.
    pub async fn set_payload(&mut self, payload: &Payload) -> Result<()> {
        self.set("setPilot", payload.clone()).await
    }

    async fn set(&mut self, operation: &'static str, payload: Payload) -> Result<()> {
        if !payload.is_valid() {
            return Err(Error::NoAttribute);
        }

        let request = Request::set_status(payload);
        let reply = self.exchange(operation, &request).await?;

        let sent = request.params().cloned().unwrap_or_default();
        let accepted = reply
            .accepted(&sent)
            .map_err(|e| Error::communication(operation, &self.ip, e))?;
        self.config.merge(&accepted);
        debug!("{} on {} accepted: {:?}", operation, self.ip, accepted);
        Ok(())
    }

    async fn exchange(&self, operation: &'static str, request: &Request) -> Result<Response> {
        let message = request
            .encode()
            .map_err(|e| Error::communication(operation, &self.ip, e))?;
        debug!("{} -> {}", operation, self.ip);

        let bytes = self
            .transport
            .round_trip(&message)
            .await
            .map_err(|e| Error::communication(operation, &self.ip, e))?;

        let reply =
            Response::decode(&bytes).map_err(|e| Error::communication(operation, &self.ip, e))?;
        let expected = request.method().as_str();
        if let Some(method) = reply.method().filter(|m| *m != expected) {
            warn!("{} replied to {} with method {}", self.ip, expected, method);
        }
        Ok(reply)
    }
}

/// Pick the scene id to send: a resolvable name first, then the literal id.
fn resolve_scene(id: Option<u16>, name: Option<&str>) -> Result<u16> {
    if let Some(scene) = name.and_then(SceneMode::from_name) {
        return Ok(scene.id());
    }
    match (id, name) {
        (Some(id), _) => Ok(id),
        (None, Some(name)) => Err(Error::UnknownScene(name.to_string())),
        (None, None) => Err(Error::NoAttribute),
    }
}
