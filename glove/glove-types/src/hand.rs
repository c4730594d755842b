//! Hand side and finger identifiers.
//!
//! Both enums carry a stable `index()` so arrays can be addressed without
//! hash maps: [`HandSide`] indexes two-element per-hand state, [`Finger`]
//! indexes five-element per-finger state in wire order.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fingers on a hand, and the element count of every
/// per-finger array in this crate.
pub const FINGER_COUNT: usize = 5;

/// Which hand a pose or feedback value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HandSide {
    /// The left hand.
    Left,
    /// The right hand.
    Right,
}

impl HandSide {
    /// Both sides, in index order.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Stable array index for per-hand state (`Left` = 0, `Right` = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// The opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for HandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A finger, in the order values are laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Finger {
    /// The thumb (wire slot 0).
    Thumb,
    /// The index finger (wire slot 1).
    Index,
    /// The middle finger (wire slot 2).
    Middle,
    /// The ring finger (wire slot 3).
    Ring,
    /// The pinky finger (wire slot 4).
    Pinky,
}

impl Finger {
    /// All fingers, in wire order.
    pub const ALL: [Self; FINGER_COUNT] = [
        Self::Thumb,
        Self::Index,
        Self::Middle,
        Self::Ring,
        Self::Pinky,
    ];

    /// Stable array index, identical to the finger's wire slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Thumb => 0,
            Self::Index => 1,
            Self::Middle => 2,
            Self::Ring => 3,
            Self::Pinky => 4,
        }
    }

    /// Finger for a wire slot, or `None` if the slot is out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Thumb),
            1 => Some(Self::Index),
            2 => Some(Self::Middle),
            3 => Some(Self::Ring),
            4 => Some(Self::Pinky),
            _ => None,
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thumb => write!(f, "thumb"),
            Self::Index => write!(f, "index"),
            Self::Middle => write!(f, "middle"),
            Self::Ring => write!(f, "ring"),
            Self::Pinky => write!(f, "pinky"),
        }
    }
}
