// Timed autoplay through a running session. Time is paused so every
// deadline is hit exactly.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use replay::{
    Cursor, PlaybackState, ReplayConfig, ReplayEngine, ReplaySession, SessionHandle, Speed,
};
use replay_test_support::fixtures::two_round_match;

fn spawn(config: ReplayConfig) -> SessionHandle {
    let engine = Arc::new(ReplayEngine::new(Arc::new(two_round_match())));
    ReplaySession::spawn(engine, &config)
}

#[tokio::test(start_paused = true)]
async fn jump_during_autoplay_restarts_the_delay() {
    let handle = spawn(ReplayConfig::default());
    let mut snapshots = handle.subscribe();

    handle.play(Speed::Normal).await.unwrap();
    sleep(Duration::from_millis(1500)).await;

    handle.jump_to_round(1).await.unwrap();
    snapshots.changed().await.unwrap();
    assert_eq!(
        snapshots.borrow_and_update().cursor(),
        Some(Cursor::new(1, 0))
    );
    let jumped_at = Instant::now();

    snapshots.changed().await.unwrap();
    assert_eq!(
        snapshots.borrow_and_update().cursor(),
        Some(Cursor::new(1, 1))
    );
    assert!(jumped_at.elapsed() >= Speed::Normal.delay());
    assert!(handle.playback().is_running());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn autoplay_from_terminal_stops_without_moving() {
    let handle = spawn(ReplayConfig::default());
    let mut snapshots = handle.subscribe();
    let mut playback = handle.subscribe_playback();

    handle.jump_to_round(1).await.unwrap();
    handle.jump_to_trick(1).await.unwrap();
    snapshots
        .wait_for(|snap| snap.cursor() == Some(Cursor::new(1, 1)))
        .await
        .unwrap();

    handle.play(Speed::Double).await.unwrap();
    playback
        .wait_for(|state| *state == PlaybackState::Running(Speed::Double))
        .await
        .unwrap();
    playback
        .wait_for(|state| *state == PlaybackState::Stopped)
        .await
        .unwrap();

    assert!(!snapshots.has_changed().unwrap());
    assert_eq!(handle.snapshot().cursor(), Some(Cursor::new(1, 1)));

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn pause_cancels_the_pending_tick() {
    let handle = spawn(ReplayConfig::default());
    let mut snapshots = handle.subscribe();

    handle.play(Speed::Normal).await.unwrap();
    sleep(Duration::from_millis(500)).await;
    handle.pause().await.unwrap();

    sleep(Duration::from_secs(10)).await;
    assert!(!snapshots.has_changed().unwrap());
    assert_eq!(handle.playback(), PlaybackState::Stopped);
    assert_eq!(snapshots.borrow_and_update().cursor(), Some(Cursor::new(0, 0)));

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn speed_change_rearms_from_now() {
    let handle = spawn(ReplayConfig::default());
    let mut snapshots = handle.subscribe();
    let started = Instant::now();

    handle.play(Speed::Half).await.unwrap();
    sleep(Duration::from_secs(1)).await;
    handle.set_speed(Speed::Double).await.unwrap();

    snapshots.changed().await.unwrap();
    assert_eq!(
        snapshots.borrow_and_update().cursor(),
        Some(Cursor::new(0, 1))
    );
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Speed::Half.delay());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn autoplay_on_start_uses_configured_speed() {
    let config = ReplayConfig::default()
        .with_speed(Speed::Double)
        .with_autoplay_on_start(true);
    let handle = spawn(config);
    assert_eq!(handle.playback(), PlaybackState::Running(Speed::Double));

    let mut snapshots = handle.subscribe();
    snapshots
        .wait_for(|snap| snap.cursor() == Some(Cursor::new(1, 1)))
        .await
        .unwrap();

    let mut playback = handle.subscribe_playback();
    playback
        .wait_for(|state| *state == PlaybackState::Stopped)
        .await
        .unwrap();

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_ends_the_session() {
    let handle = spawn(ReplayConfig::default().with_autoplay_on_start(true));
    let mut snapshots = handle.subscribe();
    drop(handle);

    // The sender side lives in the session task; once it exits the
    // receiver observes the close.
    while snapshots.changed().await.is_ok() {}
}
