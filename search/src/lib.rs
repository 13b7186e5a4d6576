//! Ferry Search: pluggable frontier search with a single driving loop.
//!
//! This crate is domain-agnostic. Worlds plug in through
//! [`contract::SearchWorldV1`]; the river-crossing world lives in
//! `ferry_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ferry_kernel  ←  ferry_harness  →  ferry_search
//! (domain model)   (runner, worlds,   (frontier, nodes,
//!                   reports)           driver)
//! ```
//!
//! `ferry_search` and `ferry_kernel` do not depend on each other.
//!
//! # Key types
//!
//! - [`SearchNodeV1`](node::SearchNodeV1) -- immutable node with a shared parent chain
//! - [`Frontier`](frontier::Frontier) -- ordering/dedup policy; [`FifoFrontier`](frontier::FifoFrontier) (BFS)
//!   and [`BestFirstFrontier`](frontier::BestFirstFrontier) (A*)
//! - [`AdmissionBudgetV1`](policy::AdmissionBudgetV1) -- object-count proxy for a memory budget
//! - [`CancelToken`](cancel::CancelToken) -- cooperative cancellation flag
//! - [`search`](search::search) -- the driver loop

#![forbid(unsafe_code)]

pub mod cancel;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
