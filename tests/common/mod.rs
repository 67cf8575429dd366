//! Common test utilities for xkcd-dl integration tests

#[allow(dead_code)]
pub mod fixtures;

pub use fixtures::*;
