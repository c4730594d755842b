//! Hand, finger, skeleton-pose, and wire-payload types for glove force feedback.
//!
//! This crate provides the shared vocabulary used by the force-feedback
//! pipeline: which hand ([`HandSide`]) and finger ([`Finger`]) a value
//! belongs to, the skeletal input ([`SkeletonPose`], [`ReferencePoses`],
//! [`BoneMap`]), and the per-finger output payload ([`FingerIntensity`])
//! together with its fixed-layout wire encoding.
//!
//! # Supported Types
//!
//! - [`HandSide`] - left or right hand
//! - [`Finger`] - thumb through pinky, in wire order
//! - [`FingerIntensity`] - five `i16` force values plus the 10-byte codec
//! - [`SkeletonPose`] - per-bone orientations as unit quaternions
//! - [`ReferencePoses`] - fully-open and fully-closed calibration poses
//! - [`BoneMap`] - bone index to finger assignment
//!
//! # Design Philosophy
//!
//! Types here are pure data: no I/O, no estimation logic, no globals.
//! Estimation lives in `glove-curl` and transport in `glove-channel`;
//! both depend on this crate and nothing here depends on them.
//!
//! All types support `serde` serialization when the `serde` feature is
//! enabled.
//!
//! # Example
//!
//! ```
//! use glove_types::{Finger, FingerIntensity};
//!
//! let mut intensity = FingerIntensity::zero();
//! intensity.set(Finger::Index, 750);
//!
//! let frame = intensity.to_wire();
//! assert_eq!(frame.len(), FingerIntensity::WIRE_SIZE);
//! assert_eq!(FingerIntensity::from_wire(frame), intensity);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bones;
mod error;
mod hand;
mod intensity;
mod pose;

pub use bones::{BoneMap, OPENVR_HAND_BONE_COUNT};
pub use error::PoseError;
pub use hand::{Finger, HandSide, FINGER_COUNT};
pub use intensity::FingerIntensity;
pub use pose::{ReferencePoses, SkeletonPose};
