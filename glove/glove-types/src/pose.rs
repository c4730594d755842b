//! Skeletal hand poses and the open/closed calibration pair.

use nalgebra::UnitQuaternion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PoseError;

/// A snapshot of one hand's skeleton as per-bone orientations.
///
/// Bone order is defined by whatever [`BoneMap`](crate::BoneMap) the
/// caller pairs the pose with; this type itself attaches no meaning to
/// indices. Orientations are typically parent-relative, but curl
/// estimation only measures angular distance between poses of the same
/// skeleton, so any consistent convention works.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkeletonPose {
    /// Orientation of each bone, indexed by bone number.
    pub bones: Vec<UnitQuaternion<f64>>,
}

impl SkeletonPose {
    /// Creates a pose from per-bone orientations.
    #[must_use]
    pub fn new(bones: Vec<UnitQuaternion<f64>>) -> Self {
        Self { bones }
    }

    /// A pose with `bone_count` identity orientations.
    #[must_use]
    pub fn identity(bone_count: usize) -> Self {
        Self {
            bones: vec![UnitQuaternion::identity(); bone_count],
        }
    }

    /// Number of bones in the pose.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Returns `true` if the pose has no bones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Orientation of one bone, or `None` if the index is out of range.
    #[must_use]
    pub fn bone(&self, index: usize) -> Option<&UnitQuaternion<f64>> {
        self.bones.get(index)
    }
}

impl From<Vec<UnitQuaternion<f64>>> for SkeletonPose {
    fn from(bones: Vec<UnitQuaternion<f64>>) -> Self {
        Self { bones }
    }
}

/// The fully-open and fully-closed calibration poses for one hand.
///
/// Curl is estimated as where the live pose sits between these two
/// extremes, so both must describe the same skeleton with the same bone
/// count and ordering. [`Self::validate`] checks that structural
/// agreement; it cannot check that the orientations themselves are
/// plausible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferencePoses {
    /// Hand fully open, fingers extended.
    pub open: SkeletonPose,
    /// Hand fully closed, fingers curled to the palm.
    pub closed: SkeletonPose,
}

impl ReferencePoses {
    /// Creates a reference pair from open and closed poses.
    #[must_use]
    pub fn new(open: SkeletonPose, closed: SkeletonPose) -> Self {
        Self { open, closed }
    }

    /// Number of bones the pair describes.
    ///
    /// Meaningful only when [`Self::is_consistent`] holds; otherwise the
    /// open pose's count is reported.
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.open.len()
    }

    /// Returns `true` if both poses are non-empty and agree on bone count.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks that both poses are non-empty and agree on bone count.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::EmptyPose`] if either pose has no bones, or
    /// [`PoseError::BoneCountMismatch`] if the counts differ.
    pub fn validate(&self) -> Result<(), PoseError> {
        if self.open.is_empty() || self.closed.is_empty() {
            return Err(PoseError::EmptyPose);
        }
        if self.open.len() != self.closed.len() {
            return Err(PoseError::BoneCountMismatch {
                open: self.open.len(),
                closed: self.closed.len(),
            });
        }
        Ok(())
    }
}
