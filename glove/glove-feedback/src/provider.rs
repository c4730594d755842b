//! Pose acquisition for the hover bridge.

use glove_types::{HandSide, ReferencePoses, SkeletonPose};
use thiserror::Error;

/// Source of skeletal pose data, implemented by the host application.
///
/// The bridge pulls poses on demand instead of reaching into the host's
/// scene or tracking runtime, which keeps estimation testable against
/// scripted data. [`skeleton_pose`](Self::skeleton_pose) is queried on
/// every hover begin; [`reference_poses`](Self::reference_poses) once
/// per hand, after which the bridge caches the pair for the session.
pub trait PoseProvider {
    /// The hand's current skeletal pose.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] when the tracking source
    /// cannot produce a pose right now.
    fn skeleton_pose(&self, side: HandSide) -> Result<SkeletonPose, ProviderError>;

    /// The hand's open/closed calibration pair.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingAsset`] when the calibration data
    /// is not installed, or [`ProviderError::Unavailable`] when it
    /// cannot be loaded right now.
    fn reference_poses(&self, side: HandSide) -> Result<ReferencePoses, ProviderError>;
}

/// Errors a [`PoseProvider`] can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The pose source exists but cannot answer right now.
    #[error("pose source unavailable: {reason}")]
    Unavailable {
        /// Why the source cannot answer.
        reason: String,
    },

    /// A required calibration asset is not installed.
    #[error("missing reference pose asset: {name}")]
    MissingAsset {
        /// Name of the missing asset.
        name: String,
    },
}

impl ProviderError {
    /// Creates a [`ProviderError::Unavailable`] with a reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a [`ProviderError::MissingAsset`] with the asset name.
    #[must_use]
    pub fn missing_asset(name: impl Into<String>) -> Self {
        Self::MissingAsset { name: name.into() }
    }
}
