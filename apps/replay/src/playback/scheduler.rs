//! Autoplay scheduler state machine.
//!
//! The scheduler never sleeps and never touches the cursor directly. It
//! tracks "running vs. stopped", the current speed, and a single pending
//! deadline; whoever drives it (the session loop) waits for the deadline and
//! calls [`AutoplayScheduler::on_deadline`], which issues one
//! `step_forward` through the navigator. Each tick is armed individually, so
//! re-arming after manual navigation or a speed change simply replaces the
//! deadline and a late tick never produces more than one step.

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, info};

use super::speed::Speed;
use crate::domain::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "speed", rename_all = "camelCase")]
pub enum PlaybackState {
    Stopped,
    Running(Speed),
}

impl PlaybackState {
    pub fn is_running(&self) -> bool {
        matches!(self, PlaybackState::Running(_))
    }
}

/// What happened when a deadline fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved; a fresh deadline is armed.
    Stepped,
    /// The cursor was already terminal; the scheduler stopped itself.
    Finished,
    /// Not running; nothing was done.
    Idle,
}

#[derive(Debug, Clone)]
pub struct AutoplayScheduler {
    speed: Speed,
    running: bool,
    deadline: Option<Instant>,
}

impl AutoplayScheduler {
    pub fn new(speed: Speed) -> Self {
        Self {
            speed,
            running: false,
            deadline: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        if self.running {
            PlaybackState::Running(self.speed)
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The single pending tick, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn start(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        self.running = true;
        self.arm(now);
        info!(speed = %speed, "Autoplay started");
    }

    pub fn stop(&mut self) {
        if self.running {
            info!(speed = %self.speed, "Autoplay stopped");
        }
        self.running = false;
        self.deadline = None;
    }

    /// Change speed. A running scheduler drops its pending tick and re-arms
    /// from `now` at the new delay.
    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        if self.running {
            self.arm(now);
        }
    }

    /// Called after any manual cursor mutation: cancel the in-flight tick and,
    /// if still running, start a fresh delay from `now`.
    pub fn rearm(&mut self, now: Instant) {
        if self.running {
            self.arm(now);
        } else {
            self.deadline = None;
        }
    }

    /// Handle an elapsed deadline: step once, stop if nothing moved.
    pub fn on_deadline(&mut self, navigator: &mut Navigator, now: Instant) -> TickOutcome {
        if !self.running {
            self.deadline = None;
            return TickOutcome::Idle;
        }

        if navigator.step_forward() {
            self.arm(now);
            TickOutcome::Stepped
        } else {
            debug!("Autoplay reached the end of the match");
            self.stop();
            TickOutcome::Finished
        }
    }

    fn arm(&mut self, now: Instant) {
        let deadline = now + self.speed.delay();
        debug!(
            speed = %self.speed,
            delay_ms = self.speed.delay().as_millis() as u64,
            "Autoplay tick armed"
        );
        self.deadline = Some(deadline);
    }
}
