#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod playback;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::ReplayConfig;
pub use domain::{
    Boundaries, Card, CardState, Color, Cursor, Match, Navigator, Position, ReplaySnapshot, Round,
    ScoreLine, Team, Trick, TrickCard,
};
pub use error::ReplayError;
pub use playback::{AutoplayScheduler, PlaybackState, ReplaySession, SessionHandle, Speed};
pub use services::record_loader;
pub use services::ReplayEngine;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    replay_test_support::logging::init();
}
