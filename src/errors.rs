use std::{net::Ipv4Addr, string::FromUtf8Error};

/// All error types that can occur when talking to a WiZ bulb.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The UDP socket for a bulb could not be opened or connected.
    #[error("cannot open connection to {ip}: {err}")]
    Connect { ip: Ipv4Addr, err: std::io::Error },

    /// A request/response exchange with a bulb failed.
    #[error("{operation} on {ip} failed: {source}")]
    Communication {
        operation: &'static str,
        ip: Ipv4Addr,
        #[source]
        source: CommunicationError,
    },

    /// Attempted to send a [`crate::Payload`] with no attributes set.
    #[error("invalid payload; no attributes set")]
    NoAttribute,

    /// Brightness outside 0-100 percent.
    #[error("invalid brightness {0}; must be between 0 and 100")]
    InvalidBrightness(u8),

    /// Scene speed outside 1-200.
    #[error("invalid speed {0}; must be between 1 and 200")]
    InvalidSpeed(u8),

    /// Color temperature outside the supported Kelvin range.
    #[error("invalid temperature {0}; must be between 2700K and 6500K or one of warm, neutral, cool")]
    InvalidTemperature(String),

    /// Failed to parse a hex color code.
    #[error("invalid hex color {0:?}; expected 6 hex digits")]
    InvalidHexColor(String),

    /// The color name is not in the built-in color table.
    #[error("unknown color name {0:?}")]
    UnknownColor(String),

    /// Neither the scene name nor the scene id resolved to a scene.
    #[error("unknown scene {0:?}")]
    UnknownScene(String),
}

impl Error {
    /// Create a new connect error
    pub fn connect(ip: &Ipv4Addr, err: std::io::Error) -> Self {
        Error::Connect { ip: *ip, err }
    }

    /// Create a new communication error for `operation` against `ip`
    pub fn communication(
        operation: &'static str,
        ip: &Ipv4Addr,
        source: impl Into<CommunicationError>,
    ) -> Self {
        Error::Communication {
            operation,
            ip: *ip,
            source: source.into(),
        }
    }

    /// The transport failure behind this error, if any.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            Error::Communication {
                source: CommunicationError::Transport(err),
                ..
            } => Some(err),
            _ => None,
        }
    }

    /// The protocol failure behind this error, if any.
    pub fn protocol(&self) -> Option<&ProtocolError> {
        match self {
            Error::Communication {
                source: CommunicationError::Protocol(err),
                ..
            } => Some(err),
            _ => None,
        }
    }

    /// Whether repeating the operation could succeed.
    ///
    /// Only transport failures qualify; a protocol failure means the bulb
    /// speaks something we do not understand.
    pub fn is_retryable(&self) -> bool {
        self.transport().is_some()
    }
}

/// A failed round-trip, either on the wire or in decoding the reply.
#[derive(Debug, thiserror::Error)]
pub enum CommunicationError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Failures of the UDP exchange itself.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The socket is no longer usable.
    #[error("socket unavailable: {0}")]
    Unavailable(std::io::Error),

    #[error("failed to send datagram: {0}")]
    Send(std::io::Error),

    #[error("failed to receive datagram: {0}")]
    Receive(std::io::Error),

    /// No reply arrived before the receive timeout.
    #[error("no reply within timeout")]
    Timeout,
}

/// Failures to make sense of what the bulb sent back.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("failed to encode request: {0}")]
    Encode(serde_json::Error),

    /// The UDP response from a bulb contained invalid UTF-8.
    #[error("reply is not utf-8: {0}")]
    Utf8(FromUtf8Error),

    #[error("malformed json reply: {0}")]
    MalformedJson(serde_json::Error),

    #[error("reply is missing field {0:?}")]
    MissingField(&'static str),

    /// The firmware answered with an error object or an unsuccessful result.
    #[error("bulb rejected request (code {code}): {message}")]
    Rejected { code: i64, message: String },
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
