//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 over `domain || data`. Each domain prefix is
//! null-terminated so no prefix is a prefix of another.
//!
//! **Exactly one place defines canonical hashing.**

use sha2::{Digest, Sha256};

use crate::carrier::state::CrossingStateV1;

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the separator is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for single-state fingerprints.
pub const DOMAIN_CROSSING_STATE: &[u8] = b"FERRY::CROSSING_STATE::V1\0";

/// Domain prefix for solution path digests.
pub const DOMAIN_SOLUTION_PATH: &[u8] = b"FERRY::SOLUTION_PATH::V1\0";

/// Domain prefix for run report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"FERRY::RUN_REPORT::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex_digest}");
    ContentHash { full, colon: 6 }
}

/// Fingerprint of one state's identity bytes.
#[must_use]
pub fn state_fingerprint(state: &CrossingStateV1) -> ContentHash {
    canonical_hash(DOMAIN_CROSSING_STATE, &state.identity_bytes())
}

/// Digest of an ordered path: identity bytes concatenated root-first.
///
/// Two runs yield the same digest iff they visited the same states in the
/// same order.
#[must_use]
pub fn path_digest(path: &[CrossingStateV1]) -> ContentHash {
    let data: Vec<u8> = path.iter().flat_map(CrossingStateV1::identity_bytes).collect();
    canonical_hash(DOMAIN_SOLUTION_PATH, &data)
}
