//! Time-driven playback: autoplay speeds, the scheduler state machine, and
//! the session task that owns the cursor.

pub mod scheduler;
pub mod session;
pub mod speed;

pub use scheduler::{AutoplayScheduler, PlaybackState, TickOutcome};
pub use session::{ReplaySession, SessionCommand, SessionHandle};
pub use speed::Speed;
