//! Finger curl estimation from skeletal hand poses.
//!
//! Given a live skeleton pose and a calibrated open/closed reference
//! pair, [`estimate_curl`] reports how far each finger has travelled
//! from open toward closed as a force intensity in `0..=1000`. The
//! measure is per-bone angular distance: a bone that has covered half
//! the rotation between its open and closed orientation contributes a
//! curl ratio of `0.5`, and a finger's ratio is the mean over its
//! contributing bones.
//!
//! Estimation is a pure function: no I/O, no shared state, and no
//! failure path. Degenerate input (mismatched bone counts, bones with
//! no open-to-closed travel, non-finite orientations) narrows the set
//! of contributing bones instead of erroring; see [`estimate_curl`] for
//! the exact rules.
//!
//! # Example
//!
//! ```
//! use glove_curl::{estimate_curl, CurlConfig};
//! use glove_types::{BoneMap, Finger, FingerIntensity, ReferencePoses, SkeletonPose};
//! use nalgebra::{UnitQuaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // One bone per finger: open at identity, closed at 90 degrees.
//! let map = BoneMap::new(Finger::ALL.iter().map(|f| Some(*f)).collect());
//! let rotated = |angle| {
//!     SkeletonPose::new(
//!         (0..5)
//!             .map(|_| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle))
//!             .collect(),
//!     )
//! };
//! let references = ReferencePoses::new(SkeletonPose::identity(5), rotated(FRAC_PI_2));
//! let config = CurlConfig::default();
//!
//! // A fully closed hand needs no holding force.
//! let closed = rotated(FRAC_PI_2);
//! assert_eq!(
//!     estimate_curl(&closed, &references, &map, &config),
//!     FingerIntensity::zero(),
//! );
//!
//! // A hand resting on its open reference discards every bone and
//! // reads full force; see the discard rules on `estimate_curl`.
//! let open = SkeletonPose::identity(5);
//! assert_eq!(
//!     estimate_curl(&open, &references, &map, &config),
//!     FingerIntensity::splat(1000),
//! );
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod estimate;

pub use config::{ClampPolicy, CurlConfig};
pub use estimate::{angular_distance_degrees, estimate_curl, estimate_curl_with_stats, CurlStats};
