//! Curl estimation over a skeletal pose.

use glove_types::{BoneMap, FingerIntensity, ReferencePoses, SkeletonPose, FINGER_COUNT};
use nalgebra::UnitQuaternion;
use tracing::warn;

use crate::config::{ClampPolicy, CurlConfig};

/// Per-finger diagnostics from one estimation pass.
///
/// Useful for calibration tooling and tests; the streaming path only
/// needs the intensity itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurlStats {
    /// Number of bones that contributed to each finger's mean.
    pub contributing: [usize; FINGER_COUNT],
    /// Mean curl ratio per finger; `0.0` when no bone contributed.
    pub mean_ratio: [f64; FINGER_COUNT],
}

/// Angular distance between two orientations, in degrees.
///
/// This is the magnitude of the single rotation carrying `a` onto `b`,
/// so it lies in `0.0..=180.0` for finite input.
#[must_use]
pub fn angular_distance_degrees(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>) -> f64 {
    a.angle_to(b).to_degrees()
}

/// Estimates per-finger curl intensity for one hand.
///
/// For every bone the [`BoneMap`] assigns to a finger, the bone's curl
/// ratio is its angular travel from the open reference divided by the
/// open-to-closed travel. Ratios are averaged per finger and inverted
/// onto the force scale: intensity `1000` commands full force at a mean
/// ratio of `0.0` (finger fully open) and `0` commands none at `1.0`
/// (fully closed).
///
/// A bone is discarded, narrowing the finger's mean, when any of:
///
/// - the map assigns it no finger,
/// - its open and closed references coincide (no travel to measure),
/// - its ratio is non-finite (a non-finite orientation upstream),
/// - its ratio is exactly zero (the bone still sits on the open pose).
///
/// A finger left with no contributing bones reads a mean of `0.0` and
/// therefore full force. In particular a hand resting exactly on its
/// open reference reads `1000` on every finger, not `0`; receivers
/// calibrated against this estimator expect that behavior, so it is
/// kept deliberately.
///
/// When the pose and references disagree on bone count, the common
/// prefix is estimated and a warning is logged.
#[must_use]
pub fn estimate_curl(
    pose: &SkeletonPose,
    references: &ReferencePoses,
    map: &BoneMap,
    config: &CurlConfig,
) -> FingerIntensity {
    estimate_curl_with_stats(pose, references, map, config).0
}

/// Estimates curl and reports per-finger diagnostics alongside.
///
/// See [`estimate_curl`] for the estimation rules.
#[must_use]
#[allow(clippy::float_cmp)] // exact zero is the discard sentinel for travel and ratio
#[allow(clippy::cast_precision_loss)] // bone counts are far below 2^52
pub fn estimate_curl_with_stats(
    pose: &SkeletonPose,
    references: &ReferencePoses,
    map: &BoneMap,
    config: &CurlConfig,
) -> (FingerIntensity, CurlStats) {
    if pose.len() != references.open.len() || pose.len() != references.closed.len() {
        warn!(
            pose_bones = pose.len(),
            open_bones = references.open.len(),
            closed_bones = references.closed.len(),
            "Bone counts disagree; estimating over the common prefix"
        );
    }
    let bone_count = pose
        .len()
        .min(references.open.len())
        .min(references.closed.len());

    let mut ratio_sum = [0.0f64; FINGER_COUNT];
    let mut contributing = [0usize; FINGER_COUNT];

    for bone in 0..bone_count {
        let Some(finger) = map.finger_for(bone) else {
            continue;
        };

        let open = &references.open.bones[bone];
        let closed = &references.closed.bones[bone];
        let travel = angular_distance_degrees(open, closed);
        if travel == 0.0 {
            continue;
        }

        let progress = angular_distance_degrees(open, &pose.bones[bone]);
        let ratio = progress / travel;
        if !ratio.is_finite() || ratio == 0.0 {
            continue;
        }

        ratio_sum[finger.index()] += ratio;
        contributing[finger.index()] += 1;
    }

    let mut mean_ratio = [0.0f64; FINGER_COUNT];
    let mut values = [0i16; FINGER_COUNT];
    for slot in 0..FINGER_COUNT {
        let mean = if contributing[slot] == 0 {
            0.0
        } else {
            ratio_sum[slot] / contributing[slot] as f64
        };
        mean_ratio[slot] = mean;
        values[slot] = intensity_from_mean(mean, config.clamp);
    }

    (
        FingerIntensity::new(values),
        CurlStats {
            contributing,
            mean_ratio,
        },
    )
}

/// Inverts a mean curl ratio onto the force scale.
#[allow(clippy::cast_possible_truncation)] // the saturating cast is the intended i16 bound
fn intensity_from_mean(mean: f64, clamp: ClampPolicy) -> i16 {
    let full_scale = f64::from(FingerIntensity::FULL_SCALE);
    let raw = full_scale - (mean * full_scale).floor();
    let bounded = match clamp {
        ClampPolicy::Saturate => raw.clamp(0.0, full_scale),
        ClampPolicy::Raw => raw,
    };
    bounded as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glove_types::Finger;
    use nalgebra::{Quaternion, Vector3};

    fn rot(degrees: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), degrees.to_radians())
    }

    fn pose(degrees: &[f64]) -> SkeletonPose {
        SkeletonPose::new(degrees.iter().map(|d| rot(*d)).collect())
    }

    /// One bone per finger, in wire order.
    fn one_bone_per_finger() -> BoneMap {
        BoneMap::new(Finger::ALL.iter().map(|f| Some(*f)).collect())
    }

    fn default_config() -> CurlConfig {
        CurlConfig::default()
    }

    fn five_finger_references() -> ReferencePoses {
        ReferencePoses::new(pose(&[0.0; 5]), pose(&[90.0; 5]))
    }

    #[test]
    fn angular_distance_measures_rotation_degrees() {
        assert_relative_eq!(
            angular_distance_degrees(&rot(0.0), &rot(90.0)),
            90.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(angular_distance_degrees(&rot(30.0), &rot(30.0)), 0.0);
    }

    #[test]
    fn fully_closed_hand_reads_zero_force() {
        let references = five_finger_references();
        let live = pose(&[90.0; 5]);
        let intensity = estimate_curl(&live, &references, &one_bone_per_finger(), &default_config());
        assert_eq!(intensity, FingerIntensity::zero());
    }

    #[test]
    fn halfway_curl_reads_half_force() {
        let references = five_finger_references();
        // 45.045 / 90 = 0.5005: half a flooring step past the midpoint,
        // so rounding noise in the angle math cannot move the result.
        let live = pose(&[45.045; 5]);
        let intensity = estimate_curl(&live, &references, &one_bone_per_finger(), &default_config());
        assert_eq!(intensity, FingerIntensity::splat(500));
    }

    #[test]
    fn open_pose_collapses_to_empty_bucket() {
        // Every ratio is exactly zero, so every bone is discarded and all
        // five buckets fall back to full force.
        let references = five_finger_references();
        let live = pose(&[0.0; 5]);
        let intensity = estimate_curl(&live, &references, &one_bone_per_finger(), &default_config());
        assert_eq!(intensity, FingerIntensity::splat(1000));
    }

    #[test]
    fn intensity_floors_fractional_ratios() {
        let references = five_finger_references();
        // 22.545 / 90 = 0.2505, floored to 250 on the force scale.
        let live = pose(&[22.545; 5]);
        let intensity = estimate_curl(&live, &references, &one_bone_per_finger(), &default_config());
        assert_eq!(intensity, FingerIntensity::splat(750));
    }

    #[test]
    fn zero_travel_bones_are_discarded() {
        // Thumb has two bones but the first never moves between the
        // references; only the second may contribute.
        let map = BoneMap::new(vec![Some(Finger::Thumb), Some(Finger::Thumb)]);
        let references = ReferencePoses::new(pose(&[0.0, 0.0]), pose(&[0.0, 90.0]));
        let live = pose(&[30.0, 45.045]);
        let (intensity, stats) =
            estimate_curl_with_stats(&live, &references, &map, &default_config());
        assert_eq!(stats.contributing[Finger::Thumb.index()], 1);
        assert_eq!(intensity.get(Finger::Thumb), 500);
    }

    #[test]
    fn unmapped_bones_never_contribute() {
        let map = BoneMap::new(vec![None, Some(Finger::Index)]);
        let references = ReferencePoses::new(pose(&[0.0, 0.0]), pose(&[90.0, 90.0]));
        // The unmapped wrist bone swings wildly; index is unaffected.
        let live = pose(&[170.0, 45.045]);
        let intensity = estimate_curl(&live, &references, &map, &default_config());
        assert_eq!(intensity.get(Finger::Index), 500);
    }

    #[test]
    fn finger_without_bones_reads_full_force() {
        let map = BoneMap::new(vec![Some(Finger::Thumb)]);
        let references = ReferencePoses::new(pose(&[0.0]), pose(&[90.0]));
        let live = pose(&[90.0]);
        let intensity = estimate_curl(&live, &references, &map, &default_config());
        assert_eq!(intensity.get(Finger::Thumb), 0);
        assert_eq!(intensity.get(Finger::Pinky), 1000);
    }

    #[test]
    fn overshoot_saturates_by_default() {
        let references = five_finger_references();
        // 135 / 90 = 1.5: past closed, raw intensity would be -500.
        let live = pose(&[135.0; 5]);
        let intensity = estimate_curl(&live, &references, &one_bone_per_finger(), &default_config());
        assert_eq!(intensity, FingerIntensity::zero());
    }

    #[test]
    fn overshoot_is_negative_when_raw() {
        let references = five_finger_references();
        // 135.045 / 90 = 1.5005: raw intensity -500 after flooring.
        let live = pose(&[135.045; 5]);
        let config = CurlConfig::new().with_clamp(ClampPolicy::Raw);
        let intensity = estimate_curl(&live, &references, &one_bone_per_finger(), &config);
        assert_eq!(intensity, FingerIntensity::splat(-500));
    }

    #[test]
    fn non_finite_orientations_are_discarded() {
        let map = BoneMap::new(vec![Some(Finger::Middle)]);
        let references = ReferencePoses::new(pose(&[0.0]), pose(&[90.0]));
        let live = SkeletonPose::new(vec![UnitQuaternion::new_unchecked(Quaternion::new(
            f64::NAN,
            0.0,
            0.0,
            0.0,
        ))]);
        let (intensity, stats) =
            estimate_curl_with_stats(&live, &references, &map, &default_config());
        assert_eq!(stats.contributing[Finger::Middle.index()], 0);
        assert_eq!(intensity.get(Finger::Middle), 1000);
    }

    #[test]
    fn mismatched_bone_counts_use_common_prefix() {
        let map = BoneMap::new(vec![Some(Finger::Thumb), Some(Finger::Index)]);
        let references = ReferencePoses::new(pose(&[0.0, 0.0]), pose(&[90.0, 90.0]));
        // The live pose is missing the second bone entirely.
        let live = pose(&[45.045]);
        let intensity = estimate_curl(&live, &references, &map, &default_config());
        assert_eq!(intensity.get(Finger::Thumb), 500);
        assert_eq!(intensity.get(Finger::Index), 1000);
    }

    #[test]
    fn stats_report_contributing_bones_and_mean() {
        let map = BoneMap::new(vec![Some(Finger::Index), Some(Finger::Index)]);
        let references = ReferencePoses::new(pose(&[0.0, 0.0]), pose(&[90.0, 90.0]));
        // Ratios 0.2505 and 0.7505 average to 0.5005.
        let live = pose(&[22.545, 67.545]);
        let (intensity, stats) =
            estimate_curl_with_stats(&live, &references, &map, &default_config());
        assert_eq!(stats.contributing[Finger::Index.index()], 2);
        assert_relative_eq!(stats.mean_ratio[Finger::Index.index()], 0.5005, epsilon = 1e-9);
        assert_eq!(intensity.get(Finger::Index), 500);
    }

    #[test]
    fn estimate_matches_stats_variant() {
        let references = five_finger_references();
        let live = pose(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let map = one_bone_per_finger();
        let config = default_config();
        let plain = estimate_curl(&live, &references, &map, &config);
        let (with_stats, _) = estimate_curl_with_stats(&live, &references, &map, &config);
        assert_eq!(plain, with_stats);
    }

    #[test]
    fn openvr_map_estimates_all_fingers() {
        use glove_types::OPENVR_HAND_BONE_COUNT;

        let map = BoneMap::openvr_hand();
        let references = ReferencePoses::new(
            SkeletonPose::identity(OPENVR_HAND_BONE_COUNT),
            pose(&[60.0; OPENVR_HAND_BONE_COUNT]),
        );
        // 30.03 / 60 = 0.5005 on every mapped bone.
        let live = pose(&[30.03; OPENVR_HAND_BONE_COUNT]);
        let intensity = estimate_curl(&live, &references, &map, &default_config());
        // Root and wrist travel is ignored; every finger sits at half curl.
        assert_eq!(intensity, FingerIntensity::splat(500));
    }
}
