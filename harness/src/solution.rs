//! The result of one harness run.

use ferry_search::search::SearchStatsV1;

/// Why a run did not produce a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKindV1 {
    /// The frontier emptied without reaching a goal.
    NoSolution,
    /// The wall-clock deadline elapsed.
    TimedOut,
    /// The admission budget was exceeded.
    MemoryLimitExceeded,
    /// The worker panicked or could not be started.
    Internal,
}

impl FailureKindV1 {
    /// Human-readable message stored in [`SolutionV1::error_message`].
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoSolution => "No solution found",
            Self::TimedOut => "Operation timed out",
            Self::MemoryLimitExceeded => "Memory limit exceeded",
            Self::Internal => "Search panicked",
        }
    }

    /// Stable machine label for reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSolution => "no_solution",
            Self::TimedOut => "timed_out",
            Self::MemoryLimitExceeded => "memory_limit_exceeded",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for FailureKindV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Time and memory consumed by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceReportV1 {
    pub elapsed_millis: u64,
    /// Resident-set growth across the run. May be negative.
    pub memory_delta_bytes: i64,
}

/// Outcome of one harness run.
///
/// Invariants: `success` implies a non-empty `path` and no `error_message`;
/// failure implies an empty `path` and a set `error_message` and `failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionV1<S> {
    /// Strategy label, `"BFS"` or `"A*"`.
    pub method_name: &'static str,
    pub success: bool,
    /// Start to goal inclusive. Empty on failure.
    pub path: Vec<S>,
    /// Nodes admitted to the frontier before the run ended.
    pub states_admitted: u64,
    pub error_message: Option<String>,
    pub failure: Option<FailureKindV1>,
    pub stats: SearchStatsV1,
    performance: Option<PerformanceReportV1>,
}

impl<S> SolutionV1<S> {
    #[must_use]
    pub fn solved(method_name: &'static str, path: Vec<S>, stats: SearchStatsV1) -> Self {
        Self {
            method_name,
            success: true,
            path,
            states_admitted: stats.admitted,
            error_message: None,
            failure: None,
            stats,
            performance: None,
        }
    }

    /// A failed run with the canonical message for `kind`.
    #[must_use]
    pub fn failed(method_name: &'static str, kind: FailureKindV1, states_admitted: u64) -> Self {
        Self::failed_with_message(method_name, kind, states_admitted, kind.message().to_string())
    }

    #[must_use]
    pub fn failed_with_message(
        method_name: &'static str,
        kind: FailureKindV1,
        states_admitted: u64,
        message: String,
    ) -> Self {
        Self {
            method_name,
            success: false,
            path: Vec::new(),
            states_admitted,
            error_message: Some(message),
            failure: Some(kind),
            stats: SearchStatsV1 {
                admitted: states_admitted,
                ..SearchStatsV1::default()
            },
            performance: None,
        }
    }

    /// Replace the zeroed stats of a failed run with what the driver saw.
    #[must_use]
    pub fn with_stats(mut self, stats: SearchStatsV1) -> Self {
        self.stats = stats;
        self
    }

    /// Number of moves in the path (states minus one).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    #[must_use]
    pub fn performance(&self) -> Option<&PerformanceReportV1> {
        self.performance.as_ref()
    }

    /// Attach measurements. Only the harness calls this, once per run.
    pub(crate) fn attach_performance(&mut self, report: PerformanceReportV1) {
        debug_assert!(self.performance.is_none(), "performance attached twice");
        self.performance = Some(report);
    }
}
