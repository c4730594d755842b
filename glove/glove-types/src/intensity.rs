//! Per-finger force intensity and its fixed-layout wire encoding.
//!
//! A force frame is five `i16` values in finger wire order (thumb, index,
//! middle, ring, pinky), encoded back-to-back in native byte order with no
//! header or framing. Sender and receiver run on the same machine, so the
//! byte order never crosses an architecture boundary.

use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hand::{Finger, FINGER_COUNT};

/// Force intensity for all five fingers of one hand.
///
/// The working range is `0..=1000` (no force to full force), but the type
/// deliberately stores the full `i16` range so that out-of-range estimator
/// output can be carried verbatim when clamping is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FingerIntensity {
    /// Intensity per finger, indexed by [`Finger::index`].
    pub values: [i16; FINGER_COUNT],
}

impl FingerIntensity {
    /// Full-scale intensity: the value that commands maximum force.
    pub const FULL_SCALE: i16 = 1000;

    /// Size of one encoded frame in bytes.
    pub const WIRE_SIZE: usize = FINGER_COUNT * 2;

    /// Creates an intensity from per-finger values in wire order.
    #[must_use]
    pub const fn new(values: [i16; FINGER_COUNT]) -> Self {
        Self { values }
    }

    /// All fingers at zero force (fully relaxed).
    #[must_use]
    pub const fn zero() -> Self {
        Self::splat(0)
    }

    /// The same value on every finger.
    #[must_use]
    pub const fn splat(value: i16) -> Self {
        Self {
            values: [value; FINGER_COUNT],
        }
    }

    /// Intensity for one finger.
    #[must_use]
    pub const fn get(&self, finger: Finger) -> i16 {
        self.values[finger.index()]
    }

    /// Sets the intensity for one finger.
    pub fn set(&mut self, finger: Finger, value: i16) {
        self.values[finger.index()] = value;
    }

    /// Returns `true` if every finger is at zero force.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }

    /// Encodes the frame as five native-endian `i16` values in wire order.
    #[must_use]
    pub fn to_wire(&self) -> [u8; Self::WIRE_SIZE] {
        let mut frame = [0u8; Self::WIRE_SIZE];
        for (slot, value) in self.values.iter().enumerate() {
            let offset = slot * 2;
            frame[offset..offset + 2].copy_from_slice(&value.to_ne_bytes());
        }
        frame
    }

    /// Decodes a frame previously produced by [`Self::to_wire`].
    #[must_use]
    pub fn from_wire(frame: [u8; Self::WIRE_SIZE]) -> Self {
        let mut values = [0i16; FINGER_COUNT];
        for (slot, value) in values.iter_mut().enumerate() {
            let offset = slot * 2;
            *value = i16::from_ne_bytes([frame[offset], frame[offset + 1]]);
        }
        Self { values }
    }
}

impl Index<Finger> for FingerIntensity {
    type Output = i16;

    fn index(&self, finger: Finger) -> &i16 {
        &self.values[finger.index()]
    }
}

impl IndexMut<Finger> for FingerIntensity {
    fn index_mut(&mut self, finger: Finger) -> &mut i16 {
        &mut self.values[finger.index()]
    }
}

impl fmt::Display for FingerIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t, i, m, r, p] = self.values;
        write!(f, "[{t} {i} {m} {r} {p}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default_and_all_zero() {
        assert_eq!(FingerIntensity::zero(), FingerIntensity::default());
        assert!(FingerIntensity::zero().is_zero());
        assert!(!FingerIntensity::splat(1).is_zero());
    }

    #[test]
    fn get_and_set_address_the_right_slot() {
        let mut intensity = FingerIntensity::zero();
        intensity.set(Finger::Ring, 321);
        assert_eq!(intensity.get(Finger::Ring), 321);
        assert_eq!(intensity.values[3], 321);
        assert_eq!(intensity.get(Finger::Thumb), 0);
    }

    #[test]
    fn index_operator_matches_get() {
        let mut intensity = FingerIntensity::new([10, 20, 30, 40, 50]);
        assert_eq!(intensity[Finger::Middle], 30);
        intensity[Finger::Middle] = 35;
        assert_eq!(intensity.get(Finger::Middle), 35);
    }

    #[test]
    fn wire_frame_is_ten_bytes() {
        assert_eq!(FingerIntensity::WIRE_SIZE, 10);
        assert_eq!(FingerIntensity::zero().to_wire(), [0u8; 10]);
    }

    #[test]
    fn wire_layout_is_native_endian_in_finger_order() {
        let intensity = FingerIntensity::new([1, 2, 3, 4, 5]);
        let frame = intensity.to_wire();
        for slot in 0..FINGER_COUNT {
            let expected = i16::try_from(slot + 1).unwrap().to_ne_bytes();
            assert_eq!(frame[slot * 2..slot * 2 + 2], expected);
        }
    }

    #[test]
    fn wire_round_trip_preserves_extreme_values() {
        let intensity = FingerIntensity::new([i16::MIN, -1, 0, FingerIntensity::FULL_SCALE, i16::MAX]);
        assert_eq!(FingerIntensity::from_wire(intensity.to_wire()), intensity);
    }

    #[test]
    fn display_lists_values_in_wire_order() {
        let intensity = FingerIntensity::new([1000, 0, -500, 42, 7]);
        assert_eq!(intensity.to_string(), "[1000 0 -500 42 7]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let intensity = FingerIntensity::new([100, 200, 300, 400, 500]);
        let json = serde_json::to_string(&intensity).unwrap();
        let back: FingerIntensity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intensity);
    }
}
