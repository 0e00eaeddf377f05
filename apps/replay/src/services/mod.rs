//! Services that sit between a loaded match record and its consumers.

pub mod record_loader;
pub mod replay_engine;

pub use replay_engine::ReplayEngine;
