//! Error types for channel transport.

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::endpoint::Endpoint;

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;

/// Errors that can occur on a force-feedback channel.
///
/// The streaming API ([`ChannelClient`](crate::ChannelClient)) folds
/// these into boolean outcomes and log lines rather than surfacing them,
/// since a missing or dying peer must never take the caller down. The
/// variants exist so that logs and configuration validation stay
/// precise.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Nobody is listening on the endpoint.
    #[error("no peer is listening on endpoint {endpoint}")]
    PeerAbsent {
        /// Key of the endpoint that was probed.
        endpoint: String,
    },

    /// The connection attempt outlived its deadline.
    #[error("connect to endpoint {endpoint} timed out after {timeout:?}")]
    ConnectTimeout {
        /// Key of the endpoint that was probed.
        endpoint: String,
        /// Deadline the attempt was given.
        timeout: Duration,
    },

    /// The connection attempt failed outright.
    #[error("connect to endpoint {endpoint} failed: {source}")]
    Connect {
        /// Key of the endpoint that was probed.
        endpoint: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A frame write failed after the connection was established.
    #[error("write to endpoint {endpoint} failed: {source}")]
    Write {
        /// Key of the endpoint written to.
        endpoint: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The channel configuration cannot be used.
    #[error("invalid channel configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },
}

impl ChannelError {
    /// Creates a [`ChannelError::PeerAbsent`] for an endpoint.
    #[must_use]
    pub fn peer_absent(endpoint: &Endpoint) -> Self {
        Self::PeerAbsent {
            endpoint: endpoint.key().to_owned(),
        }
    }

    /// Creates a [`ChannelError::ConnectTimeout`] for an endpoint.
    #[must_use]
    pub fn connect_timeout(endpoint: &Endpoint, timeout: Duration) -> Self {
        Self::ConnectTimeout {
            endpoint: endpoint.key().to_owned(),
            timeout,
        }
    }

    /// Creates a [`ChannelError::Connect`] from an I/O failure.
    #[must_use]
    pub fn connect(endpoint: &Endpoint, source: io::Error) -> Self {
        Self::Connect {
            endpoint: endpoint.key().to_owned(),
            source,
        }
    }

    /// Creates a [`ChannelError::Write`] from an I/O failure.
    #[must_use]
    pub fn write(endpoint: &Endpoint, source: io::Error) -> Self {
        Self::Write {
            endpoint: endpoint.key().to_owned(),
            source,
        }
    }

    /// Creates a [`ChannelError::InvalidConfig`] with a reason.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` for the outcomes expected when no driver is
    /// running, as opposed to genuine transport failures.
    #[must_use]
    pub fn is_peer_absence(&self) -> bool {
        matches!(self, Self::PeerAbsent { .. } | Self::ConnectTimeout { .. })
    }
}
