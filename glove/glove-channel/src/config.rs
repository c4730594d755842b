//! Channel configuration.

use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ChannelError;

/// Default deadline for one connection attempt.
///
/// Chosen so that probing both hands at startup with no drivers present
/// stalls the caller for a fraction of a second at worst.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(100);

/// Default deadline for one frame write.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_millis(250);

/// Configuration shared by all channels of one application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelConfig {
    /// Directory the endpoint sockets live under.
    ///
    /// Defaults to the user runtime directory (`$XDG_RUNTIME_DIR`),
    /// falling back to the system temp directory where none exists.
    pub base_dir: PathBuf,

    /// Deadline for one connection attempt.
    pub connect_timeout: Duration,

    /// Deadline for one frame write, or `None` to block indefinitely.
    pub write_timeout: Option<Duration>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            write_timeout: Some(DEFAULT_WRITE_TIMEOUT),
        }
    }
}

impl ChannelConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the socket base directory.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Sets the connection deadline.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the write deadline, or `None` for blocking writes.
    #[must_use]
    pub fn with_write_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Checks that the configured deadlines are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::InvalidConfig`] if either timeout is zero;
    /// the platform treats a zero socket timeout as an error, not as
    /// "no timeout".
    pub fn validate(&self) -> Result<(), ChannelError> {
        if self.connect_timeout.is_zero() {
            return Err(ChannelError::invalid_config("connect timeout must be non-zero"));
        }
        if matches!(self.write_timeout, Some(timeout) if timeout.is_zero()) {
            return Err(ChannelError::invalid_config("write timeout must be non-zero when set"));
        }
        Ok(())
    }
}

fn default_base_dir() -> PathBuf {
    dirs::runtime_dir().unwrap_or_else(std::env::temp_dir)
}
