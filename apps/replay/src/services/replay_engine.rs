//! Replay engine: one finished match plus its derived-state caches.
//!
//! Holds the read-only match and memoizes hand reconstruction per round.
//! Caching is an optimization only; every value here can be recomputed from
//! the match at any time.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::domain::{
    build_snapshot, reconstruct_hands, summarize, Match, MatchSummary, Navigator, Position,
    ReplaySnapshot, RoundHands,
};

#[derive(Debug)]
pub struct ReplayEngine {
    record: Arc<Match>,
    /// Reconstructed hands, indexed by round.
    hands: Vec<OnceCell<Arc<RoundHands>>>,
}

impl ReplayEngine {
    pub fn new(record: Arc<Match>) -> Self {
        let hands = (0..record.rounds.len()).map(|_| OnceCell::new()).collect();
        Self { record, hands }
    }

    pub fn record(&self) -> &Arc<Match> {
        &self.record
    }

    /// A navigator positioned at the start of this match.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.record.clone())
    }

    /// Reconstructed hands for `round_index`, computed once per round.
    pub fn hands_for(&self, round_index: usize) -> Option<Arc<RoundHands>> {
        let round = self.record.round(round_index)?;
        let cell = self.hands.get(round_index)?;
        let hands = cell.get_or_init(|| {
            debug!(round_index, "Reconstructing hands");
            Arc::new(reconstruct_hands(
                round,
                &self.record.player_names,
                round_index,
            ))
        });
        Some(hands.clone())
    }

    pub fn snapshot(&self, position: Position) -> ReplaySnapshot {
        let Position::At(cursor) = position else {
            return ReplaySnapshot::empty();
        };
        match self.hands_for(cursor.round_index) {
            Some(hands) => build_snapshot(&self.record, cursor, &hands),
            None => ReplaySnapshot::empty(),
        }
    }

    pub fn summary(&self) -> MatchSummary {
        summarize(&self.record)
    }
}
