//! World implementations for the harness runner.

pub mod river_crossing;
