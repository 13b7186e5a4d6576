//! Operators module: trip enumeration and the successor generator.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod transition;
