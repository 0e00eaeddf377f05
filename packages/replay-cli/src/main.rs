//! Replay CLI - inspect and play back recorded matches from the terminal.

mod output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use output::{SnapshotText, SummaryTable};
use replay::{
    record_loader, PlaybackState, ReplayConfig, ReplayEngine, ReplaySession, ReplaySnapshot, Speed,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "replay-cli")]
#[command(about = "Step through or auto-play a recorded match")]
struct Args {
    /// Enable verbose plain-text logging instead of JSON telemetry
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the per-round table and final score
    Summary {
        /// Match record (JSON)
        file: PathBuf,
    },
    /// Print the replay state at one position
    Show {
        /// Match record (JSON)
        file: PathBuf,

        /// Round index (0-based, clamped to the last round)
        #[arg(long, default_value = "0")]
        round: usize,

        /// Trick index within the round (0-based, clamped)
        #[arg(long, default_value = "0")]
        trick: usize,

        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Auto-play the match, printing every position until playback stops
    Play {
        /// Match record (JSON)
        file: PathBuf,

        /// Playback speed: 0.5, 1 or 2 (defaults to REPLAY_AUTOPLAY_SPEED)
        #[arg(long)]
        speed: Option<Speed>,

        /// Round index to start from (0-based, clamped)
        #[arg(long, default_value = "0")]
        from_round: usize,

        /// Emit one JSON snapshot per line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    } else {
        replay::telemetry::init_tracing();
    }

    match args.command {
        Command::Summary { file } => {
            let engine = load(&file)?;
            print!("{}", SummaryTable(&engine.summary()));
        }
        Command::Show {
            file,
            round,
            trick,
            json,
        } => {
            let engine = load(&file)?;
            let mut navigator = engine.navigator();
            navigator.jump_to_round(round);
            navigator.jump_to_trick(trick);
            print_snapshot(&engine.snapshot(navigator.position()), json)?;
        }
        Command::Play {
            file,
            speed,
            from_round,
            json,
        } => {
            let config = ReplayConfig::from_env()?;
            let speed = speed.unwrap_or(config.autoplay_speed);
            let engine = Arc::new(load(&file)?);
            play(engine, &config.with_autoplay_on_start(false), speed, from_round, json).await?;
        }
    }

    Ok(())
}

fn load(file: &Path) -> Result<ReplayEngine, Box<dyn std::error::Error>> {
    let record = record_loader::from_path(file)?;
    Ok(ReplayEngine::new(Arc::new(record)))
}

fn print_snapshot(
    snapshot: &ReplaySnapshot,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
    } else {
        print!("{}", SnapshotText(snapshot));
    }
    Ok(())
}

async fn play(
    engine: Arc<ReplayEngine>,
    config: &ReplayConfig,
    speed: Speed,
    from_round: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut start = engine.navigator();
    start.jump_to_round(from_round);
    let start = start.position();

    let handle = ReplaySession::spawn(engine, config);
    let mut snapshots = handle.subscribe();
    let mut playback = handle.subscribe_playback();

    handle.jump_to_round(from_round).await?;
    let first = snapshots
        .wait_for(|snap| snap.position == start)
        .await?
        .clone();
    print_snapshot(&first, json)?;

    if first.is_empty() {
        handle.shutdown().await;
        return Ok(());
    }

    info!(speed = %speed, from_round, "Starting playback");
    handle.play(speed).await?;
    playback
        .wait_for(|state| *state == PlaybackState::Running(speed))
        .await?;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if !json {
                    println!();
                }
                print_snapshot(&snapshot, json)?;
            }
            changed = playback.changed() => {
                if changed.is_err() || !playback.borrow_and_update().is_running() {
                    debug!("Playback stopped");
                    break;
                }
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}
