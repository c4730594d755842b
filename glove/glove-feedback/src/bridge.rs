//! Hover-event glue between estimation and routing.

use glove_curl::{estimate_curl, CurlConfig};
use glove_types::{BoneMap, HandSide, ReferencePoses, SkeletonPose};
use tracing::{debug, warn};

use crate::provider::PoseProvider;
use crate::router::FeedbackRouter;

/// Turns hover begin/end events into force frames.
///
/// The bridge owns the router, the pose source, and the estimation
/// setup, so the host only forwards interaction events: hover begin
/// estimates the hand's curl and commands it as force, hover end
/// relaxes the hand unless it is grasping the hovered object.
///
/// Reference poses are pulled from the provider lazily, once per hand,
/// and cached for the bridge's lifetime.
pub struct HoverBridge<P: PoseProvider> {
    provider: P,
    router: FeedbackRouter,
    bone_map: BoneMap,
    curl_config: CurlConfig,
    references: [Option<ReferencePoses>; 2],
}

impl<P: PoseProvider> HoverBridge<P> {
    /// Creates a bridge over a provider and a router.
    #[must_use]
    pub fn new(
        provider: P,
        router: FeedbackRouter,
        bone_map: BoneMap,
        curl_config: CurlConfig,
    ) -> Self {
        Self {
            provider,
            router,
            bone_map,
            curl_config,
            references: [None, None],
        }
    }

    /// Connects the channels, answering how many found a driver.
    pub fn open(&mut self) -> usize {
        self.router.open()
    }

    /// Handles a hover begin by estimating curl from the provider's
    /// current pose, answering whether a force frame was delivered.
    pub fn on_hover_begin(&mut self, side: HandSide) -> bool {
        let pose = match self.provider.skeleton_pose(side) {
            Ok(pose) => pose,
            Err(error) => {
                warn!(%side, %error, "Skeleton pose unavailable; hover ignored");
                return false;
            }
        };
        self.on_hover_begin_with_pose(side, &pose)
    }

    /// Handles a hover begin with a pose the host already has in hand.
    ///
    /// Identical to [`on_hover_begin`](Self::on_hover_begin) except that
    /// the provider is not queried for the live pose.
    pub fn on_hover_begin_with_pose(&mut self, side: HandSide, pose: &SkeletonPose) -> bool {
        if !self.ensure_references(side) {
            return false;
        }
        let Some(references) = self.references[side.index()].as_ref() else {
            return false;
        };
        let intensity = estimate_curl(pose, references, &self.bone_map, &self.curl_config);
        debug!(%side, %intensity, "Hover curl estimated");
        self.router.set_force(side, intensity)
    }

    /// Handles a hover end, answering whether a relax frame was
    /// delivered.
    ///
    /// A hand still grasping the hovered object keeps its force; the
    /// matching relax arrives when the grasp's own release logic ends
    /// the interaction.
    pub fn on_hover_end(&mut self, side: HandSide, is_grasping: bool) -> bool {
        if is_grasping {
            debug!(%side, "Hover ended while grasping; force retained");
            return false;
        }
        self.router.relax(side)
    }

    /// Relaxes both hands and closes the channels.
    ///
    /// Safe to call repeatedly; once the channels are down the relax
    /// frames are simply dropped.
    pub fn close(&mut self) {
        self.router.relax_all();
        self.router.shutdown();
    }

    /// The underlying router.
    #[must_use]
    pub fn router(&self) -> &FeedbackRouter {
        &self.router
    }

    /// The pose provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Loads and caches the hand's reference poses on first use.
    fn ensure_references(&mut self, side: HandSide) -> bool {
        if self.references[side.index()].is_some() {
            return true;
        }
        match self.provider.reference_poses(side) {
            Ok(references) => {
                if let Err(error) = references.validate() {
                    warn!(%side, %error, "Reference poses are inconsistent; estimation will degrade");
                }
                self.references[side.index()] = Some(references);
                true
            }
            Err(error) => {
                warn!(%side, %error, "Reference poses unavailable; hover ignored");
                false
            }
        }
    }
}

impl<P: PoseProvider> Drop for HoverBridge<P> {
    fn drop(&mut self) {
        self.close();
    }
}
