//! Estimator configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How intensities outside the working range are treated.
///
/// A live bone can rotate past its closed reference (ratio above `1.0`)
/// or away from both references, so the raw arithmetic can leave
/// `0..=1000`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClampPolicy {
    /// Clamp intensities into `0..=1000` before they reach the wire.
    #[default]
    Saturate,
    /// Send the raw arithmetic result, saturated only at the `i16` range.
    ///
    /// Matches receivers that do their own clamping and want to observe
    /// overshoot.
    Raw,
}

/// Configuration for curl estimation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurlConfig {
    /// Range policy for the produced intensities.
    pub clamp: ClampPolicy,
}

impl CurlConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clamping policy.
    #[must_use]
    pub fn with_clamp(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }
}
