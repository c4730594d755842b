//! Error types for pose validation.

use thiserror::Error;

/// Errors detected when validating skeletal pose data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseError {
    /// A pose that should describe a skeleton has no bones.
    #[error("pose has no bones")]
    EmptyPose,

    /// The open and closed reference poses disagree on bone count.
    #[error("reference pose bone counts differ: open has {open}, closed has {closed}")]
    BoneCountMismatch {
        /// Bone count of the fully-open pose.
        open: usize,
        /// Bone count of the fully-closed pose.
        closed: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_lowercase_and_specific() {
        assert_eq!(PoseError::EmptyPose.to_string(), "pose has no bones");
        let err = PoseError::BoneCountMismatch { open: 31, closed: 30 };
        assert!(err.to_string().contains("open has 31"));
        assert!(err.to_string().contains("closed has 30"));
    }
}
