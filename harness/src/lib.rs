//! Ferry Harness: resource-governed execution of searches.
//!
//! The harness runs the search driver on a worker thread under a deadline
//! and an admission budget, measures elapsed time and resident-memory
//! growth, and always returns a [`solution::SolutionV1`]. Timeouts, budget
//! exhaustion and worker panics never cross this boundary as errors.
//!
//! The harness does NOT implement search logic; it delegates to
//! `ferry_search`. Worlds provide domain rules only, and the harness owns
//! orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod config;
pub mod memory;
pub mod report;
pub mod runner;
pub mod solution;
pub mod worlds;
