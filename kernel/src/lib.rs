//! Ferry Kernel: the river-crossing domain model.
//!
//! # API Surface
//!
//! - [`carrier::state::CrossingStateV1`] -- one immutable puzzle configuration
//! - [`operators::transition::TransitionGenerator`] -- valid successors, goal test, heuristic
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 fingerprints
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. `operators` depends on `carrier`; `proof` depends on
//! `carrier` for identity bytes. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
