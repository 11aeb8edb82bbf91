//! # wizard_rs
//!
//! Control WiZ Wi-Fi light bulbs over the local network, without the vendor
//! app or cloud.
//!
//! A [`Light`] talks to one bulb over UDP port 38899 using the bulb's JSON
//! protocol (`getPilot` / `setPilot`) and keeps a cached [`Configuration`]
//! of what the bulb last reported, updated after every successful command.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::net::Ipv4Addr;
//! use wizard_rs::{Brightness, ColorSpec, Light, SceneMode};
//!
//! async fn control_light() -> Result<(), wizard_rs::Error> {
//!     let mut light = Light::connect(Ipv4Addr::new(192, 168, 1, 100)).await?;
//!
//!     light.turn_on().await?;
//!     light.set_color(&ColorSpec::Hex("FF8000".into())).await?;
//!     light.set_brightness(Brightness::create(60).unwrap()).await?;
//!     light.set_scene_by_name("Ocean").await?;
//!
//!     println!("power: {:?}", light.config().power());
//!     Ok(())
//! }
//! ```
//!
//! ## Communication
//!
//! Every call is one request datagram and one reply datagram, with a two
//! second receive timeout and no retries. [`Light::toggle`] is the only
//! operation that needs two round-trips (a status query, then the switch).
//!
//! Fields the bulb does not report for its current mode are `None` in the
//! [`Configuration`]; they are never filled in with defaults.
//!
//! ## Feature Flags
//!
//! - `cli` (default): builds the `wizard` command-line tool

mod config;
mod errors;
mod light;
mod payload;
mod request;
mod response;
mod transport;
mod types;

// Re-export public API
pub use config::Configuration;
pub use errors::{CommunicationError, Error, ProtocolError, TransportError};
pub use light::Light;
pub use payload::Payload;
pub use request::{Method, Request};
pub use response::Response;
pub use transport::{Transport, UdpTransport};
pub use types::{Brightness, Color, ColorSpec, Kelvin, SceneMode, Speed};
