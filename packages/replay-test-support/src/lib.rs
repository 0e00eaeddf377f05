//! Shared helpers for replay integration tests.

pub mod fixtures;
pub mod logging;
