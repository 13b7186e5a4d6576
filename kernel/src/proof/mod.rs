//! Proof module: canonical hashing of states and solution paths.
//!
//! Depends on `carrier`. Nothing depends on `proof` within the kernel.

pub mod hash;
