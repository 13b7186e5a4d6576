//! `RiverCrossing`: the two-population river-crossing puzzle as a search
//! world.
//!
//! Rules live in the kernel's [`TransitionGenerator`]; this type only binds
//! them to [`SearchWorldV1`].

use ferry_kernel::carrier::params::CrossingParamsV1;
use ferry_kernel::carrier::state::CrossingStateV1;
use ferry_kernel::operators::transition::TransitionGenerator;

use ferry_search::contract::SearchWorldV1;

/// Search-capable river-crossing world for one instance.
#[derive(Debug)]
pub struct RiverCrossing {
    generator: TransitionGenerator,
}

impl RiverCrossing {
    #[must_use]
    pub fn new(params: CrossingParamsV1) -> Self {
        Self {
            generator: TransitionGenerator::new(params),
        }
    }

    #[must_use]
    pub fn params(&self) -> &CrossingParamsV1 {
        self.generator.params()
    }

    /// Everyone on the origin bank.
    #[must_use]
    pub fn start_state(&self) -> CrossingStateV1 {
        self.generator.start_state()
    }

    /// Bounds and safety check for a single state.
    #[must_use]
    pub fn is_valid(&self, state: &CrossingStateV1) -> bool {
        self.generator.is_valid(state)
    }
}

impl SearchWorldV1 for RiverCrossing {
    type State = CrossingStateV1;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "river_crossing"
    }

    fn next_states(&self, state: &CrossingStateV1) -> Vec<CrossingStateV1> {
        self.generator.next_states(state)
    }

    fn is_goal(&self, state: &CrossingStateV1) -> bool {
        self.generator.is_goal(state)
    }

    fn heuristic(&self, state: &CrossingStateV1) -> u64 {
        self.generator.heuristic(state)
    }
}
