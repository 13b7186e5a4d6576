//! Typed search errors.
//!
//! `SearchError` covers the two abnormal terminations of the driver. Both
//! propagate out of [`crate::search::search`] unchanged; the harness is the
//! single place that turns them into failed results. Running out of
//! successors is not an error (see [`crate::search::SearchOutcome::Exhausted`]).

/// Abnormal termination of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier admitted more nodes than its ceiling allows.
    BudgetExceeded { admitted: u64, limit: u64 },
    /// The cancel token was observed at the top of the driver loop.
    Cancelled { admitted: u64, expansions: u64 },
}

impl SearchError {
    /// Nodes admitted by the frontier before the run stopped.
    #[must_use]
    pub fn admitted(&self) -> u64 {
        match self {
            Self::BudgetExceeded { admitted, .. } | Self::Cancelled { admitted, .. } => *admitted,
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BudgetExceeded { admitted, limit } => {
                write!(f, "admission budget exceeded: {admitted} nodes, limit is {limit}")
            }
            Self::Cancelled {
                admitted,
                expansions,
            } => {
                write!(
                    f,
                    "search cancelled after {expansions} expansions ({admitted} nodes admitted)"
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
