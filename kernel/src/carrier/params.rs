//! Instance parameters for the river-crossing puzzle.

use crate::carrier::state::{Bank, CrossingStateV1};

/// The fixed dimensions of one puzzle instance.
///
/// Type A is the population whose presence must not be outnumbered by
/// type B on either bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossingParamsV1 {
    /// Total units of type A.
    pub total_a: u32,
    /// Total units of type B.
    pub total_b: u32,
    /// Carrier capacity (units per trip).
    pub capacity: u32,
}

impl CrossingParamsV1 {
    #[must_use]
    pub const fn new(total_a: u32, total_b: u32, capacity: u32) -> Self {
        Self {
            total_a,
            total_b,
            capacity,
        }
    }

    /// Largest load a single trip may carry: `min(capacity, total_a, total_b)`.
    #[must_use]
    pub fn max_load(&self) -> u32 {
        self.capacity.min(self.total_a).min(self.total_b)
    }

    /// Everyone on the origin bank, carrier on the origin bank.
    #[must_use]
    pub const fn start_state(&self) -> CrossingStateV1 {
        CrossingStateV1::new(self.total_a, self.total_b, Bank::Origin)
    }
}

impl Default for CrossingParamsV1 {
    /// The classic three-and-three instance with a two-seat carrier.
    fn default() -> Self {
        Self::new(3, 3, 2)
    }
}
