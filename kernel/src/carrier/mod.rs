//! Carrier module: puzzle states, banks, and instance parameters.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod params;
pub mod state;
