//! The per-hand channel client.

use std::fmt;
use std::io::{self, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use glove_types::FingerIntensity;
use tracing::{debug, warn};

use crate::config::ChannelConfig;
use crate::endpoint::Endpoint;
use crate::error::ChannelError;

/// Longest socket path accepted across Unix-family platforms; `sun_path`
/// is 104 bytes on macOS and the BSDs, 108 on Linux.
const MAX_SOCKET_PATH: usize = 104;

/// Connection state of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No live connection; sends are dropped.
    Disconnected,
    /// A stream to the peer is open.
    Connected,
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connected => write!(f, "connected"),
        }
    }
}

/// Outbound force-feedback channel for one hand.
///
/// A client is bound to one [`Endpoint`] for its whole life and holds at
/// most one stream to it. All operations degrade gracefully: connecting
/// to an absent peer reports `false`, sending without a connection
/// reports `false`, and a failed send closes the channel for the rest of
/// the session rather than propagating an error.
///
/// The client never reconnects on its own. If the driver restarts,
/// feedback for that hand stays off until the caller decides to
/// [`connect`](Self::connect) again.
pub struct ChannelClient {
    endpoint: Endpoint,
    config: ChannelConfig,
    stream: Option<UnixStream>,
}

impl ChannelClient {
    /// Creates a disconnected client for one endpoint.
    #[must_use]
    pub fn new(endpoint: Endpoint, config: ChannelConfig) -> Self {
        Self {
            endpoint,
            config,
            stream: None,
        }
    }

    /// Connects using the configured deadline.
    ///
    /// See [`connect_with_timeout`](Self::connect_with_timeout).
    pub fn connect(&mut self) -> bool {
        self.connect_with_timeout(self.config.connect_timeout)
    }

    /// Attempts to connect to the endpoint, answering whether the
    /// channel is now connected.
    ///
    /// An absent or unresponsive peer yields `false` after at most
    /// `timeout`; this is the expected outcome when no driver is
    /// running and is logged at debug level only. Calling on an already
    /// connected channel is a no-op that reports `true`.
    ///
    /// An attempt still in flight at the deadline is abandoned; its
    /// worker thread exits once the underlying connect resolves.
    pub fn connect_with_timeout(&mut self, timeout: Duration) -> bool {
        if self.stream.is_some() {
            return true;
        }
        let path = self.endpoint.socket_path(&self.config.base_dir);
        match connect_stream(&self.endpoint, &path, timeout) {
            Ok(stream) => {
                if let Err(error) = stream.set_write_timeout(self.config.write_timeout) {
                    warn!(endpoint = %self.endpoint, %error, "Failed to apply write timeout");
                }
                debug!(endpoint = %self.endpoint, path = %path.display(), "Channel connected");
                self.stream = Some(stream);
                true
            }
            Err(error) if error.is_peer_absence() => {
                debug!(endpoint = %self.endpoint, %error, "Channel peer not available");
                false
            }
            Err(error) => {
                warn!(endpoint = %self.endpoint, %error, "Channel connect failed");
                false
            }
        }
    }

    /// Writes one intensity frame, answering whether it was written.
    ///
    /// Returns `false` without side effects when disconnected. A write
    /// failure closes the channel, so later sends report `false`
    /// immediately instead of erroring against a dead peer.
    pub fn send(&mut self, intensity: FingerIntensity) -> bool {
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };
        match stream.write_all(&intensity.to_wire()) {
            Ok(()) => true,
            Err(source) => {
                let error = ChannelError::write(&self.endpoint, source);
                warn!(%error, "Channel write failed; closing for the session");
                self.stream = None;
                false
            }
        }
    }

    /// Closes the channel. Safe to call repeatedly or while
    /// disconnected.
    pub fn disconnect(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(error) = stream.shutdown(Shutdown::Both) {
                debug!(endpoint = %self.endpoint, %error, "Socket shutdown reported an error");
            }
            debug!(endpoint = %self.endpoint, "Channel disconnected");
        }
    }

    /// Current connection state.
    #[must_use]
    pub fn state(&self) -> ChannelState {
        if self.stream.is_some() {
            ChannelState::Connected
        } else {
            ChannelState::Disconnected
        }
    }

    /// Returns `true` if a stream to the peer is open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// The endpoint this client is bound to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The configuration this client was created with.
    #[must_use]
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }
}

impl fmt::Debug for ChannelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelClient")
            .field("endpoint", &self.endpoint)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Drop for ChannelClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Connects to a socket path with a hard deadline.
///
/// `UnixStream` has no native connect timeout, so the attempt runs on a
/// short-lived thread and the caller waits on a channel for the result.
fn connect_stream(
    endpoint: &Endpoint,
    path: &Path,
    timeout: Duration,
) -> Result<UnixStream, ChannelError> {
    if path.as_os_str().len() > MAX_SOCKET_PATH {
        return Err(ChannelError::invalid_config(format!(
            "socket path exceeds {MAX_SOCKET_PATH} bytes: {}",
            path.display()
        )));
    }

    let (sender, receiver) = mpsc::channel();
    let connect_path = path.to_path_buf();
    let spawned = thread::Builder::new()
        .name("glove-channel-connect".into())
        .spawn(move || {
            let _ = sender.send(UnixStream::connect(&connect_path));
        });
    if let Err(source) = spawned {
        return Err(ChannelError::connect(endpoint, source));
    }

    match receiver.recv_timeout(timeout) {
        Ok(Ok(stream)) => Ok(stream),
        Ok(Err(source))
            if matches!(
                source.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::ConnectionRefused
            ) =>
        {
            Err(ChannelError::peer_absent(endpoint))
        }
        Ok(Err(source)) => Err(ChannelError::connect(endpoint, source)),
        Err(mpsc::RecvTimeoutError::Timeout) => {
            Err(ChannelError::connect_timeout(endpoint, timeout))
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(ChannelError::connect(
            endpoint,
            io::Error::other("connect thread exited without a result"),
        )),
    }
}
