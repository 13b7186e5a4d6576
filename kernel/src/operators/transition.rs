//! `TransitionGenerator`: valid successor states for the river-crossing puzzle.
//!
//! One trip moves a load `(a, b)` of units away from the carrier's bank and
//! flips the carrier. Loads satisfy `1 <= a + b <= max_load`, so at least one
//! unit rides and the carrier never exceeds capacity.
//!
//! The load table for each bank is computed on first use and cached for the
//! lifetime of the generator. Successor order is deterministic: loads are
//! enumerated `a` ascending, then `b` ascending.

use std::fmt;
use std::sync::OnceLock;

use crate::carrier::params::CrossingParamsV1;
use crate::carrier::state::{Bank, CrossingStateV1, StateError};

/// One trip: how many units of each type ride, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDelta {
    /// Type A units carried.
    pub a: u32,
    /// Type B units carried.
    pub b: u32,
    /// The bank the carrier leaves from.
    pub from: Bank,
}

impl MoveDelta {
    /// Apply this trip to `state`.
    ///
    /// Returns `None` when the load cannot be taken from the origin bank
    /// (underflow) or would overfill it on the way back (exceeds totals).
    /// Safety is not checked here.
    #[must_use]
    pub fn apply(&self, state: &CrossingStateV1, params: &CrossingParamsV1) -> Option<CrossingStateV1> {
        if state.carrier != self.from {
            return None;
        }
        let (left_a, left_b) = match self.from {
            Bank::Origin => (
                state.left_a.checked_sub(self.a)?,
                state.left_b.checked_sub(self.b)?,
            ),
            Bank::Far => (
                state.left_a.checked_add(self.a)?,
                state.left_b.checked_add(self.b)?,
            ),
        };
        if left_a > params.total_a || left_b > params.total_b {
            return None;
        }
        Some(CrossingStateV1::new(left_a, left_b, self.from.flip()))
    }
}

/// Typed failure for generator queries with raw inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A carrier side outside `{0, 1}` was requested.
    InvalidCarrierSide { side: u8 },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCarrierSide { side } => {
                write!(f, "no move table for carrier side {side} (expected 0 or 1)")
            }
        }
    }
}

impl std::error::Error for TransitionError {}

impl From<StateError> for TransitionError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::InvalidCarrierSide { side } => Self::InvalidCarrierSide { side },
        }
    }
}

/// Successor generator, goal test, and heuristic for one puzzle instance.
///
/// `Send + Sync`: the lazily filled load tables use `OnceLock`, so a
/// generator can be handed to a worker thread.
#[derive(Debug)]
pub struct TransitionGenerator {
    params: CrossingParamsV1,
    /// Indexed by `Bank::side()`.
    deltas: [OnceLock<Vec<MoveDelta>>; 2],
}

impl TransitionGenerator {
    #[must_use]
    pub fn new(params: CrossingParamsV1) -> Self {
        Self {
            params,
            deltas: [OnceLock::new(), OnceLock::new()],
        }
    }

    #[must_use]
    pub fn params(&self) -> &CrossingParamsV1 {
        &self.params
    }

    #[must_use]
    pub fn start_state(&self) -> CrossingStateV1 {
        self.params.start_state()
    }

    /// The cached load table for trips leaving `bank`.
    #[must_use]
    pub fn move_deltas(&self, bank: Bank) -> &[MoveDelta] {
        self.deltas[usize::from(bank.side())].get_or_init(|| enumerate_deltas(&self.params, bank))
    }

    /// The cached load table for a raw carrier side.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidCarrierSide`] if `side` is not 0 or 1.
    pub fn move_deltas_for_side(&self, side: u8) -> Result<&[MoveDelta], TransitionError> {
        let bank = Bank::try_from(side)?;
        Ok(self.move_deltas(bank))
    }

    /// All valid successors of `state`, in load-table order. Never fails;
    /// returns an empty vector when no trip is legal.
    #[must_use]
    pub fn next_states(&self, state: &CrossingStateV1) -> Vec<CrossingStateV1> {
        self.move_deltas(state.carrier)
            .iter()
            .filter_map(|delta| delta.apply(state, &self.params))
            .filter(|candidate| self.is_valid(candidate))
            .collect()
    }

    /// Bounds plus the safety invariant on both banks.
    ///
    /// On each bank, type A may be absent, but if present it must not be
    /// outnumbered by type B.
    #[must_use]
    pub fn is_valid(&self, state: &CrossingStateV1) -> bool {
        let p = &self.params;
        if state.left_a > p.total_a || state.left_b > p.total_b {
            return false;
        }
        let right_a = p.total_a - state.left_a;
        let right_b = p.total_b - state.left_b;
        bank_is_safe(state.left_a, state.left_b) && bank_is_safe(right_a, right_b)
    }

    /// Everyone has crossed and the carrier sits on the far bank.
    #[must_use]
    pub fn is_goal(&self, state: &CrossingStateV1) -> bool {
        state.left_a == 0 && state.left_b == 0 && state.carrier == Bank::Far
    }

    /// Remaining origin-bank population: `left_a + left_b`.
    #[must_use]
    pub fn heuristic(&self, state: &CrossingStateV1) -> u64 {
        u64::from(state.left_a) + u64::from(state.left_b)
    }
}

fn bank_is_safe(a: u32, b: u32) -> bool {
    a == 0 || a >= b
}

fn enumerate_deltas(params: &CrossingParamsV1, from: Bank) -> Vec<MoveDelta> {
    let max_load = params.max_load();
    let mut out = Vec::new();
    for a in 0..=max_load {
        for b in 0..=(max_load - a) {
            if a + b > 0 {
                out.push(MoveDelta { a, b, from });
            }
        }
    }
    out
}
