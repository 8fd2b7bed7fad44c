//! Common utilities for the Kata crates.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal output for
//!   input that is accepted but unusual

pub mod warning;
