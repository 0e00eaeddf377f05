//! Replay session: the single task that owns a replay's cursor.
//!
//! Commands from the UI arrive over a channel and are applied one at a time,
//! so every command is atomic from the caller's point of view. The only
//! suspension point besides waiting for commands is the autoplay deadline,
//! which is re-created on every loop turn from the scheduler's state; a
//! command that re-arms the scheduler therefore cancels the in-flight tick
//! simply by replacing the deadline.
//!
//! Consumers read derived state from two watch channels: the snapshot for
//! the current position (published only when the cursor changes) and the
//! playback state.

use std::future::pending;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn, Instrument};

use super::scheduler::{AutoplayScheduler, PlaybackState, TickOutcome};
use super::speed::Speed;
use crate::config::ReplayConfig;
use crate::domain::{Navigator, ReplaySnapshot};
use crate::error::ReplayError;
use crate::services::ReplayEngine;
use crate::telemetry::session_span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    StepForward,
    StepBackward,
    JumpToRound(usize),
    JumpToTrick(usize),
    Play(Speed),
    Pause,
    SetSpeed(Speed),
}

enum Event {
    Cancelled,
    Command(Option<SessionCommand>),
    Tick,
}

pub struct ReplaySession {
    engine: Arc<ReplayEngine>,
    navigator: Navigator,
    scheduler: AutoplayScheduler,
    commands: mpsc::Receiver<SessionCommand>,
    snapshots: watch::Sender<Arc<ReplaySnapshot>>,
    playback: watch::Sender<PlaybackState>,
    cancel: CancellationToken,
}

impl ReplaySession {
    /// Spawn the session task on the current tokio runtime.
    pub fn spawn(engine: Arc<ReplayEngine>, config: &ReplayConfig) -> SessionHandle {
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer.max(1));

        let navigator = engine.navigator();
        let initial = Arc::new(engine.snapshot(navigator.position()));
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);

        let mut scheduler = AutoplayScheduler::new(config.autoplay_speed);
        if config.autoplay_on_start {
            scheduler.start(config.autoplay_speed, Instant::now());
        }
        let (playback_tx, playback_rx) = watch::channel(scheduler.state());

        let cancel = CancellationToken::new();
        let span = session_span(engine.record());
        let session = ReplaySession {
            engine,
            navigator,
            scheduler,
            commands: command_rx,
            snapshots: snapshot_tx,
            playback: playback_tx,
            cancel: cancel.clone(),
        };
        let task = tokio::spawn(session.run().instrument(span));

        SessionHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            playback: playback_rx,
            cancel,
            task,
        }
    }

    async fn run(mut self) {
        info!(
            tricks = self.engine.record().total_tricks(),
            "Replay session started"
        );

        loop {
            let deadline = self.scheduler.deadline();
            let event = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => Event::Cancelled,
                command = self.commands.recv() => Event::Command(command),
                _ = wait_until(deadline) => Event::Tick,
            };

            match event {
                Event::Cancelled => {
                    debug!("Replay session cancelled");
                    break;
                }
                Event::Command(None) => {
                    debug!("All session handles dropped");
                    break;
                }
                Event::Command(Some(command)) => self.apply(command),
                Event::Tick => self.tick(),
            }
        }

        // Dropping the scheduler's deadline here means no tick can fire into
        // a disposed cursor.
        self.scheduler.stop();
        self.publish_playback();
        info!("Replay session closed");
    }

    fn apply(&mut self, command: SessionCommand) {
        let now = Instant::now();
        debug!(?command, "Applying session command");

        match command {
            SessionCommand::StepForward => {
                let moved = self.navigator.step_forward();
                self.after_manual_step(moved, now);
            }
            SessionCommand::StepBackward => {
                let moved = self.navigator.step_backward();
                self.after_manual_step(moved, now);
            }
            SessionCommand::JumpToRound(n) => {
                let moved = self.navigator.jump_to_round(n);
                self.after_jump(moved, now);
            }
            SessionCommand::JumpToTrick(n) => {
                let moved = self.navigator.jump_to_trick(n);
                self.after_jump(moved, now);
            }
            SessionCommand::Play(speed) => {
                self.scheduler.start(speed, now);
                self.publish_playback();
            }
            SessionCommand::Pause => {
                self.scheduler.stop();
                self.publish_playback();
            }
            SessionCommand::SetSpeed(speed) => {
                self.scheduler.set_speed(speed, now);
                self.publish_playback();
            }
        }
    }

    fn after_manual_step(&mut self, moved: bool, now: Instant) {
        if moved {
            self.scheduler.rearm(now);
            self.publish_snapshot();
        }
    }

    // Jumps are a deliberate override: the pending tick is always replaced.
    fn after_jump(&mut self, moved: bool, now: Instant) {
        self.scheduler.rearm(now);
        if moved {
            self.publish_snapshot();
        }
    }

    fn tick(&mut self) {
        match self
            .scheduler
            .on_deadline(&mut self.navigator, Instant::now())
        {
            TickOutcome::Stepped => self.publish_snapshot(),
            TickOutcome::Finished => self.publish_playback(),
            TickOutcome::Idle => {}
        }
    }

    fn publish_snapshot(&self) {
        let snapshot = self.engine.snapshot(self.navigator.position());
        self.snapshots.send_replace(Arc::new(snapshot));
    }

    fn publish_playback(&self) {
        let state = self.scheduler.state();
        self.playback.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => pending::<()>().await,
    }
}

/// Owner's side of a running session.
///
/// Dropping the handle closes the command channel, which ends the session
/// task and drops any pending autoplay tick.
#[derive(Debug)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    snapshots: watch::Receiver<Arc<ReplaySnapshot>>,
    playback: watch::Receiver<PlaybackState>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub async fn send(&self, command: SessionCommand) -> Result<(), ReplayError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| ReplayError::SessionClosed)
    }

    pub async fn step_forward(&self) -> Result<(), ReplayError> {
        self.send(SessionCommand::StepForward).await
    }

    pub async fn step_backward(&self) -> Result<(), ReplayError> {
        self.send(SessionCommand::StepBackward).await
    }

    pub async fn jump_to_round(&self, n: usize) -> Result<(), ReplayError> {
        self.send(SessionCommand::JumpToRound(n)).await
    }

    pub async fn jump_to_trick(&self, n: usize) -> Result<(), ReplayError> {
        self.send(SessionCommand::JumpToTrick(n)).await
    }

    pub async fn play(&self, speed: Speed) -> Result<(), ReplayError> {
        self.send(SessionCommand::Play(speed)).await
    }

    pub async fn pause(&self) -> Result<(), ReplayError> {
        self.send(SessionCommand::Pause).await
    }

    pub async fn set_speed(&self, speed: Speed) -> Result<(), ReplayError> {
        self.send(SessionCommand::SetSpeed(speed)).await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Arc<ReplaySnapshot> {
        self.snapshots.borrow().clone()
    }

    pub fn playback(&self) -> PlaybackState {
        *self.playback.borrow()
    }

    /// A receiver notified on every cursor change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ReplaySnapshot>> {
        self.snapshots.clone()
    }

    pub fn subscribe_playback(&self) -> watch::Receiver<PlaybackState> {
        self.playback.clone()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Resolves once the session task has stopped accepting commands.
    pub async fn closed(&self) {
        self.commands.closed().await
    }

    /// Cancel the session and wait for its task to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(err) = self.task.await {
            warn!(error = %err, "Replay session task did not shut down cleanly");
        }
    }
}
