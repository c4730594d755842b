//! Bone-index to finger assignment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hand::Finger;

/// Number of bones in the OpenVR hand skeleton.
pub const OPENVR_HAND_BONE_COUNT: usize = 31;

/// Finger assignment for the OpenVR hand skeleton, by bone index.
///
/// Root and wrist carry no finger. Each finger owns its phalanx chain
/// plus one auxiliary bone at the tail of the skeleton.
const OPENVR_HAND_FINGERS: [Option<Finger>; OPENVR_HAND_BONE_COUNT] = [
    // 0: root, 1: wrist
    None,
    None,
    // 2-5: thumb chain
    Some(Finger::Thumb),
    Some(Finger::Thumb),
    Some(Finger::Thumb),
    Some(Finger::Thumb),
    // 6-10: index chain
    Some(Finger::Index),
    Some(Finger::Index),
    Some(Finger::Index),
    Some(Finger::Index),
    Some(Finger::Index),
    // 11-15: middle chain
    Some(Finger::Middle),
    Some(Finger::Middle),
    Some(Finger::Middle),
    Some(Finger::Middle),
    Some(Finger::Middle),
    // 16-20: ring chain
    Some(Finger::Ring),
    Some(Finger::Ring),
    Some(Finger::Ring),
    Some(Finger::Ring),
    Some(Finger::Ring),
    // 21-25: pinky chain
    Some(Finger::Pinky),
    Some(Finger::Pinky),
    Some(Finger::Pinky),
    Some(Finger::Pinky),
    Some(Finger::Pinky),
    // 26-30: auxiliary bones, thumb through pinky
    Some(Finger::Thumb),
    Some(Finger::Index),
    Some(Finger::Middle),
    Some(Finger::Ring),
    Some(Finger::Pinky),
];

/// Maps skeleton bone indices to the finger they belong to.
///
/// Bones that drive no finger (root, wrist, metacarpals in some rigs)
/// map to `None` and are ignored by curl estimation. The map is built
/// once per rig and shared across both hands; OpenVR-style skeletons
/// use the same bone ordering for left and right.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoneMap {
    fingers: Vec<Option<Finger>>,
}

impl BoneMap {
    /// Creates a map from a per-bone finger assignment.
    #[must_use]
    pub fn new(fingers: Vec<Option<Finger>>) -> Self {
        Self { fingers }
    }

    /// The standard 31-bone OpenVR hand skeleton.
    #[must_use]
    pub fn openvr_hand() -> Self {
        Self {
            fingers: OPENVR_HAND_FINGERS.to_vec(),
        }
    }

    /// Number of bones the map covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    /// Returns `true` if the map covers no bones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    /// Finger assigned to a bone index.
    ///
    /// Returns `None` both for bones mapped to no finger and for indices
    /// beyond the map, so callers can iterate any skeleton length against
    /// any map without bounds juggling.
    #[must_use]
    pub fn finger_for(&self, bone: usize) -> Option<Finger> {
        self.fingers.get(bone).copied().flatten()
    }

    /// Iterates the per-bone finger assignment in bone order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Finger>> + '_ {
        self.fingers.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openvr_map_covers_the_full_skeleton() {
        let map = BoneMap::openvr_hand();
        assert_eq!(map.len(), OPENVR_HAND_BONE_COUNT);
        assert!(!map.is_empty());
    }

    #[test]
    fn root_and_wrist_drive_no_finger() {
        let map = BoneMap::openvr_hand();
        assert_eq!(map.finger_for(0), None);
        assert_eq!(map.finger_for(1), None);
    }

    #[test]
    fn openvr_finger_chains_are_contiguous() {
        let map = BoneMap::openvr_hand();
        for bone in 2..=5 {
            assert_eq!(map.finger_for(bone), Some(Finger::Thumb));
        }
        for bone in 6..=10 {
            assert_eq!(map.finger_for(bone), Some(Finger::Index));
        }
        for bone in 21..=25 {
            assert_eq!(map.finger_for(bone), Some(Finger::Pinky));
        }
    }

    #[test]
    fn auxiliary_bones_follow_finger_order() {
        let map = BoneMap::openvr_hand();
        for (offset, finger) in Finger::ALL.iter().enumerate() {
            assert_eq!(map.finger_for(26 + offset), Some(*finger));
        }
    }

    #[test]
    fn openvr_bone_counts_per_finger() {
        let map = BoneMap::openvr_hand();
        let count = |finger| map.iter().filter(|f| *f == Some(finger)).count();
        // Thumb has one phalanx fewer than the other fingers.
        assert_eq!(count(Finger::Thumb), 5);
        assert_eq!(count(Finger::Index), 6);
        assert_eq!(count(Finger::Middle), 6);
        assert_eq!(count(Finger::Ring), 6);
        assert_eq!(count(Finger::Pinky), 6);
    }

    #[test]
    fn out_of_range_bones_map_to_none() {
        let map = BoneMap::openvr_hand();
        assert_eq!(map.finger_for(OPENVR_HAND_BONE_COUNT), None);
        assert_eq!(map.finger_for(usize::MAX), None);
    }

    #[test]
    fn custom_map_reports_assignments() {
        let map = BoneMap::new(vec![None, Some(Finger::Thumb), Some(Finger::Pinky)]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.finger_for(1), Some(Finger::Thumb));
        assert_eq!(map.finger_for(2), Some(Finger::Pinky));
    }
}
