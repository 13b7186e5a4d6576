//! Run configuration: the deadline and admission budget a harness run
//! executes under.
//!
//! Callers pass [`RunConfigOverrides`]; [`build_config`] resolves them
//! against the defaults and clamps non-positive values, so a [`RunConfigV1`]
//! is always usable.

use std::time::Duration;

use ferry_search::policy::{
    AdmissionBudgetV1, DEFAULT_BYTES_PER_OBJECT, DEFAULT_MEMORY_BUDGET_BYTES,
};

/// Default wall-clock deadline for one run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shortest deadline the harness will honor. Zero is clamped up to this.
pub const MIN_TIMEOUT: Duration = Duration::from_millis(1);

/// Per-run overrides. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct RunConfigOverrides {
    /// Wall-clock deadline. `None` uses [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
    /// Memory budget in bytes. `None` uses 512 MiB.
    pub memory_budget_bytes: Option<u64>,
    /// Assumed bytes per admitted node. `None` uses 100.
    pub bytes_per_object: Option<u64>,
}

/// Resolved policy for one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfigV1 {
    pub timeout: Duration,
    pub budget: AdmissionBudgetV1,
}

impl RunConfigV1 {
    /// Build a policy directly, clamping a zero timeout to [`MIN_TIMEOUT`].
    #[must_use]
    pub fn new(timeout: Duration, budget: AdmissionBudgetV1) -> Self {
        Self {
            timeout: timeout.max(MIN_TIMEOUT),
            budget,
        }
    }

    /// JSON snapshot of the effective config, embedded in run reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "bytes_per_object": self.budget.bytes_per_object,
            "max_admitted": self.budget.max_admitted(),
            "memory_budget_bytes": self.budget.memory_budget_bytes,
            "timeout_millis": u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

impl Default for RunConfigV1 {
    fn default() -> Self {
        build_config(&RunConfigOverrides::default())
    }
}

/// Resolve `overrides` against the defaults.
#[must_use]
pub fn build_config(overrides: &RunConfigOverrides) -> RunConfigV1 {
    let budget = AdmissionBudgetV1::new(
        overrides
            .memory_budget_bytes
            .unwrap_or(DEFAULT_MEMORY_BUDGET_BYTES),
        overrides.bytes_per_object.unwrap_or(DEFAULT_BYTES_PER_OBJECT),
    );
    RunConfigV1::new(overrides.timeout.unwrap_or(DEFAULT_TIMEOUT), budget)
}
