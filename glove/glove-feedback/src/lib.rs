//! Force-feedback routing from hover events to glove drivers.
//!
//! This crate ties the pipeline together. A [`FeedbackRouter`] owns one
//! outbound channel per hand and exposes force commands by side; a
//! [`HoverBridge`] listens to the host's hover events, runs curl
//! estimation over poses pulled from a [`PoseProvider`], and routes the
//! result. Nothing here is fatal: absent drivers, failed sends, and
//! unavailable poses all degrade to "no feedback on that hand" plus a
//! log line.
//!
//! The whole pipeline is single-threaded and synchronous. One hover
//! event produces at most one frame on one channel, and ordering per
//! hand follows call order.
//!
//! # Example
//!
//! ```no_run
//! use glove_channel::ChannelConfig;
//! use glove_curl::CurlConfig;
//! use glove_feedback::{FeedbackRouter, HoverBridge, PoseProvider, ProviderError};
//! use glove_types::{BoneMap, HandSide, ReferencePoses, SkeletonPose};
//!
//! /// The host's pose source, usually backed by a tracking runtime.
//! struct Tracking;
//!
//! impl PoseProvider for Tracking {
//!     fn skeleton_pose(&self, _side: HandSide) -> Result<SkeletonPose, ProviderError> {
//!         Ok(SkeletonPose::identity(31))
//!     }
//!
//!     fn reference_poses(&self, _side: HandSide) -> Result<ReferencePoses, ProviderError> {
//!         Err(ProviderError::missing_asset("hand_poses"))
//!     }
//! }
//!
//! let router = FeedbackRouter::new(ChannelConfig::default());
//! let mut bridge = HoverBridge::new(
//!     Tracking,
//!     router,
//!     BoneMap::openvr_hand(),
//!     CurlConfig::default(),
//! );
//!
//! bridge.open();
//! bridge.on_hover_begin(HandSide::Left);
//! bridge.on_hover_end(HandSide::Left, false);
//! bridge.close();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bridge;
mod provider;
mod router;

pub use bridge::HoverBridge;
pub use provider::{PoseProvider, ProviderError};
pub use router::FeedbackRouter;
