use tracing::{info_span, Span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::Match;

/// Install the JSON tracing subscriber used by replay front ends.
///
/// `RUST_LOG` overrides the default filter, which keeps replay events at
/// `info` and everything else at `warn`. Calling this twice is a no-op.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,replay=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .json()
        .with_current_span(true)
        .with_span_list(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}

/// Span wrapping one replay session; every session event carries the
/// record's shape.
pub fn session_span(record: &Match) -> Span {
    info_span!(
        "replay_session",
        rounds = record.rounds.len(),
        stops = record.timeline_len(),
        players = record.player_names.len(),
    )
}
