//! Outgoing protocol messages.

use serde::Serialize;

use crate::errors::ProtocolError;
use crate::payload::Payload;

/// Protocol methods understood by the bulb.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Query the current state.
    #[serde(rename = "getPilot")]
    GetStatus,
    /// Change one or more parameters.
    #[serde(rename = "setPilot")]
    SetStatus,
}

impl Method {
    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GetStatus => "getPilot",
            Method::SetStatus => "setPilot",
        }
    }
}

/// A single command to a bulb.
///
/// Without parameters the `params` key is left out of the JSON entirely; the
/// firmware does not accept `null` or `{}` in its place.
///
/// # Examples
///
/// ```
/// use wizard_rs::{Payload, Request};
///
/// assert_eq!(Request::get_status().encode().unwrap(), br#"{"method":"getPilot"}"#);
///
/// let mut params = Payload::new();
/// params.power(true);
/// assert_eq!(
///     Request::set_status(params).encode().unwrap(),
///     br#"{"method":"setPilot","params":{"state":true}}"#
/// );
/// assert_eq!(
///     Request::set_status(Payload::new()).encode().unwrap(),
///     br#"{"method":"setPilot"}"#
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    params: Option<Payload>,
}

impl Request {
    pub fn get_status() -> Self {
        Request {
            method: Method::GetStatus,
            params: None,
        }
    }

    /// A `setPilot` command. An empty payload carries no `params` key.
    pub fn set_status(params: Payload) -> Self {
        Request {
            method: Method::SetStatus,
            params: params.is_valid().then_some(params),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn params(&self) -> Option<&Payload> {
        self.params.as_ref()
    }

    /// Serialize to the UTF-8 JSON text sent in the datagram.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(self).map_err(ProtocolError::Encode)
    }
}
