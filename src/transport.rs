//! UDP request/response exchange with a single bulb.

use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use log::debug;
use tokio::net::UdpSocket;

use crate::errors::{Error, TransportError};

/// One request datagram out, one reply datagram back.
///
/// [`UdpTransport`] is the real thing; other implementations let a
/// [`crate::Light`] run against a simulated bulb.
pub trait Transport: Send + Sync {
    /// Send `payload` and wait for the reply.
    fn round_trip(
        &self,
        payload: &[u8],
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

/// A UDP socket connected to a bulb on port 38899.
///
/// The socket is bound to an ephemeral local port and kept for the lifetime of
/// the transport. There is no retry: a lost datagram surfaces as
/// [`TransportError::Timeout`].
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    target: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    /// The bulb's listening port. Not configurable on the device.
    pub const PORT: u16 = 38899;
    /// How long to wait for a reply.
    pub const TIMEOUT: Duration = Duration::from_secs(2);
    const BUFFER_SIZE: usize = 4096;

    /// Open a socket for the bulb at `ip`.
    pub async fn bind(ip: Ipv4Addr) -> Result<Self, Error> {
        Self::bind_addr(SocketAddr::from((ip, Self::PORT)))
            .await
            .map_err(|e| Error::connect(&ip, e))
    }

    pub(crate) async fn bind_addr(target: SocketAddr) -> io::Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(target).await?;
        let local = socket.local_addr()?;
        debug!("bound {} for bulb at {}", local, target);
        Ok(UdpTransport {
            socket,
            target,
            timeout: Self::TIMEOUT,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Throw away replies that arrived after an earlier request timed out, so
    /// they are not mistaken for the answer to the next one.
    fn discard_stale(&self) {
        let mut buffer = [0u8; Self::BUFFER_SIZE];
        while let Ok(len) = self.socket.try_recv(&mut buffer) {
            debug!("discarding {} stale bytes from {}", len, self.target);
        }
    }
}

impl Transport for UdpTransport {
    async fn round_trip(&self, payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.discard_stale();

        debug!("-> {}: {}", self.target, String::from_utf8_lossy(payload));
        self.socket.send(payload).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotConnected | io::ErrorKind::BrokenPipe => {
                TransportError::Unavailable(e)
            }
            _ => TransportError::Send(e),
        })?;

        let mut buffer = [0u8; Self::BUFFER_SIZE];
        let len = tokio::time::timeout(self.timeout, self.socket.recv(&mut buffer))
            .await
            .map_err(|_| TransportError::Timeout)?
            .map_err(TransportError::Receive)?;

        debug!(
            "<- {}: {}",
            self.target,
            String::from_utf8_lossy(&buffer[..len])
        );
        Ok(buffer[..len].to_vec())
    }
}
