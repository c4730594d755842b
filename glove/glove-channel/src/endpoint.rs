//! Named force-feedback endpoints.

use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glove_types::HandSide;

/// Namespace prefix shared by all force-feedback endpoints.
pub const FFB_NAMESPACE: &str = "vrapplication";

/// A named channel endpoint a driver may listen on.
///
/// The key doubles as the socket's path relative to the configured base
/// directory, so `vrapplication/ffb/curl/left` becomes
/// `<base>/vrapplication/ffb/curl/left.sock`. Drivers and clients agree
/// on keys, not on absolute paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Endpoint {
    key: String,
}

impl Endpoint {
    /// The curl force-feedback endpoint for one hand.
    #[must_use]
    pub fn curl(side: HandSide) -> Self {
        Self {
            key: format!("{FFB_NAMESPACE}/ffb/curl/{side}"),
        }
    }

    /// An endpoint with an explicit key, for non-standard drivers.
    #[must_use]
    pub fn from_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The endpoint's key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Filesystem path of the endpoint's socket under `base_dir`.
    #[must_use]
    pub fn socket_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(format!("{}.sock", self.key))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
