//! `CrossingStateV1`: one configuration of the river-crossing puzzle.
//!
//! # Layout of identity bytes (9 bytes)
//!
//! | Offset | Width  | Field     |
//! |--------|--------|-----------|
//! | 0      | u32le  | `left_a`  |
//! | 4      | u32le  | `left_b`  |
//! | 8      | u8     | carrier side (0 = origin, 1 = far) |
//!
//! Identity bytes are the canonical form for fingerprints and path digests.
//! Far-bank populations are not stored; they are derived from the instance
//! totals in [`crate::carrier::params::CrossingParamsV1`].

use std::fmt;

/// Size of [`CrossingStateV1::identity_bytes`].
pub const IDENTITY_LEN: usize = 9;

/// The bank a carrier (boat) currently sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bank {
    /// Side 0: where every unit starts.
    Origin,
    /// Side 1: where every unit must end.
    Far,
}

impl Bank {
    /// Both banks in side order.
    pub const ALL: [Self; 2] = [Self::Origin, Self::Far];

    /// The numeric side index (0 or 1).
    #[must_use]
    pub const fn side(self) -> u8 {
        match self {
            Self::Origin => 0,
            Self::Far => 1,
        }
    }

    /// The opposite bank.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Origin => Self::Far,
            Self::Far => Self::Origin,
        }
    }
}

impl TryFrom<u8> for Bank {
    type Error = StateError;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        match side {
            0 => Ok(Self::Origin),
            1 => Ok(Self::Far),
            other => Err(StateError::InvalidCarrierSide { side: other }),
        }
    }
}

/// Typed failure for raw state construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Carrier side outside `{0, 1}`.
    InvalidCarrierSide { side: u8 },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCarrierSide { side } => {
                write!(f, "carrier side must be 0 or 1, got {side}")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// An immutable puzzle configuration.
///
/// Structural equality and hashing make it usable as a visited-set key.
/// A state carries no validity guarantee of its own; bounds and the safety
/// invariant are enforced by the transition generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CrossingStateV1 {
    /// Units of type A still on the origin bank.
    pub left_a: u32,
    /// Units of type B still on the origin bank.
    pub left_b: u32,
    /// Where the carrier is.
    pub carrier: Bank,
}

impl CrossingStateV1 {
    #[must_use]
    pub const fn new(left_a: u32, left_b: u32, carrier: Bank) -> Self {
        Self {
            left_a,
            left_b,
            carrier,
        }
    }

    /// Construct from a raw carrier side.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidCarrierSide`] if `side` is not 0 or 1.
    pub fn from_raw(left_a: u32, left_b: u32, side: u8) -> Result<Self, StateError> {
        Ok(Self::new(left_a, left_b, Bank::try_from(side)?))
    }

    /// Fixed-width identity encoding (see module docs).
    #[must_use]
    pub fn identity_bytes(&self) -> [u8; IDENTITY_LEN] {
        let mut out = [0u8; IDENTITY_LEN];
        out[..4].copy_from_slice(&self.left_a.to_le_bytes());
        out[4..8].copy_from_slice(&self.left_b.to_le_bytes());
        out[8] = self.carrier.side();
        out
    }
}

impl fmt::Display for CrossingStateV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.left_a, self.left_b, self.carrier.side())
    }
}
