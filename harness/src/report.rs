//! Run reports: a JSON rendering of one river-crossing run and a directory
//! format that pins it with a content digest.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_report.json         compact JSON, keys sorted
//!   run_report_digest.txt   canonical_hash(DOMAIN_RUN_REPORT, run_report.json)
//! ```
//!
//! `serde_json` without `preserve_order` stores objects in a `BTreeMap`, so
//! `to_vec` already emits sorted keys with no whitespace. Those bytes are
//! what the digest covers.

use std::path::{Path, PathBuf};

use ferry_kernel::carrier::params::CrossingParamsV1;
use ferry_kernel::carrier::state::CrossingStateV1;
use ferry_kernel::proof::hash::{
    canonical_hash, path_digest, state_fingerprint, ContentHash, DOMAIN_RUN_REPORT,
};

use crate::solution::SolutionV1;

/// Schema tag embedded in every report.
pub const REPORT_SCHEMA: &str = "ferry.run_report.v1";

pub const REPORT_FILENAME: &str = "run_report.json";
pub const DIGEST_FILENAME: &str = "run_report_digest.txt";

/// Error writing a report directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportWriteError {
    Io { detail: String },
    SerializeError { detail: String },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::SerializeError { detail } => write!(f, "JSON serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ReportWriteError {}

/// Error reading a report directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportReadError {
    /// A required file is absent or unreadable.
    MissingFile { name: String },
    /// The stored digest is not a `ContentHash`.
    DigestMalformed { value: String },
    /// The report bytes do not hash to the stored digest.
    DigestMismatch { declared: String, computed: String },
    /// The report is not valid JSON.
    ParseError { detail: String },
    /// The report carries an unexpected schema tag.
    SchemaMismatch { found: String },
}

impl std::fmt::Display for ReportReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile { name } => write!(f, "missing report file: {name}"),
            Self::DigestMalformed { value } => write!(f, "malformed digest: {value:?}"),
            Self::DigestMismatch { declared, computed } => {
                write!(f, "report digest mismatch: declared {declared}, computed {computed}")
            }
            Self::ParseError { detail } => write!(f, "report parse error: {detail}"),
            Self::SchemaMismatch { found } => {
                write!(f, "unexpected report schema {found:?} (expected {REPORT_SCHEMA:?})")
            }
        }
    }
}

impl std::error::Error for ReportReadError {}

fn state_json(state: &CrossingStateV1) -> serde_json::Value {
    serde_json::json!([state.left_a, state.left_b, state.carrier.side()])
}

impl SolutionV1<CrossingStateV1> {
    /// Render this run as a report value.
    ///
    /// States are `[left_a, left_b, carrier_side]`. `path_digest` is `null`
    /// for failed runs.
    #[must_use]
    pub fn to_report_json(&self, params: &CrossingParamsV1) -> serde_json::Value {
        let performance = self.performance().map_or(serde_json::Value::Null, |p| {
            serde_json::json!({
                "elapsed_millis": p.elapsed_millis,
                "memory_delta_bytes": p.memory_delta_bytes,
            })
        });
        let path_digest = if self.path.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(path_digest(&self.path).to_string())
        };

        serde_json::json!({
            "error_message": self.error_message,
            "failure": self.failure.map(|kind| kind.as_str()),
            "instance": {
                "capacity": params.capacity,
                "start_fingerprint": state_fingerprint(&params.start_state()).to_string(),
                "total_a": params.total_a,
                "total_b": params.total_b,
            },
            "method": self.method_name,
            "path": self.path.iter().map(state_json).collect::<Vec<_>>(),
            "path_digest": path_digest,
            "performance": performance,
            "schema": REPORT_SCHEMA,
            "states_admitted": self.states_admitted,
            "stats": {
                "admitted": self.stats.admitted,
                "dominated_pruned": self.stats.dominated_pruned,
                "duplicates_suppressed": self.stats.duplicates_suppressed,
                "expansions": self.stats.expansions,
                "frontier_high_water": self.stats.frontier_high_water,
            },
            "steps": self.steps(),
            "success": self.success,
        })
    }
}

/// Write `solution` as a report directory under `dir`.
///
/// Returns the path of `run_report.json` and the digest stored beside it.
///
/// # Errors
///
/// Returns [`ReportWriteError`] on I/O failure or serialization error.
pub fn write_report(
    dir: &Path,
    solution: &SolutionV1<CrossingStateV1>,
    params: &CrossingParamsV1,
) -> Result<(PathBuf, ContentHash), ReportWriteError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportWriteError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    let bytes = serde_json::to_vec(&solution.to_report_json(params)).map_err(|e| {
        ReportWriteError::SerializeError {
            detail: e.to_string(),
        }
    })?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);

    let report_path = dir.join(REPORT_FILENAME);
    write_atomic(&report_path, &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;
    Ok((report_path, digest))
}

/// Read a report directory back, verifying its digest and schema.
///
/// # Errors
///
/// Returns [`ReportReadError`] on any validation failure.
pub fn read_report(dir: &Path) -> Result<serde_json::Value, ReportReadError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let declared_raw = read_required(dir, DIGEST_FILENAME)?;
    let declared_text = String::from_utf8_lossy(&declared_raw).trim().to_string();
    let declared =
        ContentHash::parse(&declared_text).ok_or_else(|| ReportReadError::DigestMalformed {
            value: declared_text.clone(),
        })?;

    let computed = canonical_hash(DOMAIN_RUN_REPORT, &bytes);
    if computed != declared {
        return Err(ReportReadError::DigestMismatch {
            declared: declared.to_string(),
            computed: computed.to_string(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ReportReadError::ParseError {
            detail: e.to_string(),
        })?;
    let schema = value
        .get("schema")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    if schema != REPORT_SCHEMA {
        return Err(ReportReadError::SchemaMismatch {
            found: schema.to_string(),
        });
    }
    Ok(value)
}

/// Write bytes via temp file + rename in the same directory.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportWriteError> {
    let dir = path.parent().ok_or_else(|| ReportWriteError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_path = dir.join(format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    std::fs::write(&temp_path, content).map_err(|e| ReportWriteError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportWriteError::Io {
        detail: format!("rename {} to {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, name: &str) -> Result<Vec<u8>, ReportReadError> {
    std::fs::read(dir.join(name)).map_err(|_| ReportReadError::MissingFile {
        name: name.to_string(),
    })
}
