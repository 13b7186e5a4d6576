//! Process memory probe.
//!
//! Resident set size is read from `/proc/self/status`. On platforms without
//! procfs the probe returns `None` and deltas collapse to zero.

use std::fs;

const STATUS_PATH: &str = "/proc/self/status";
const RSS_FIELD: &str = "VmRSS:";

/// Current resident set size in bytes, if the platform exposes it.
#[must_use]
pub fn resident_set_bytes() -> Option<u64> {
    let status = fs::read_to_string(STATUS_PATH).ok()?;
    parse_vm_rss(&status)
}

/// Extract `VmRSS` (reported in kB) from a `/proc/<pid>/status` body.
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with(RSS_FIELD))?;
    let mut fields = line[RSS_FIELD.len()..].split_whitespace();
    let value: u64 = fields.next()?.parse().ok()?;
    if fields.next() != Some("kB") {
        return None;
    }
    value.checked_mul(1024)
}

/// A resident-memory reading taken before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySnapshot {
    rss_bytes: Option<u64>,
}

impl MemorySnapshot {
    #[must_use]
    pub fn take() -> Self {
        Self {
            rss_bytes: resident_set_bytes(),
        }
    }

    /// Signed growth from `self` to `later`. Zero when either side is
    /// unavailable.
    #[must_use]
    pub fn delta_to(&self, later: &Self) -> i64 {
        match (self.rss_bytes, later.rss_bytes) {
            (Some(before), Some(after)) => {
                let before = i64::try_from(before).unwrap_or(i64::MAX);
                let after = i64::try_from(after).unwrap_or(i64::MAX);
                after.saturating_sub(before)
            }
            _ => 0,
        }
    }
}
