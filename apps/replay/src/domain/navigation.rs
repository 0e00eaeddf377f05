//! Navigation controller: the only owner of the replay position.
//!
//! The four commands here are the only operations that move the cursor.
//! Each is synchronous and returns whether the position changed;
//! autoplay treats an unchanged position as the signal to stop.

use std::sync::Arc;

use tracing::debug;

use super::cursor::{Boundaries, Cursor, Position};
use super::match_record::Match;

#[derive(Debug, Clone)]
pub struct Navigator {
    record: Arc<Match>,
    position: Position,
}

impl Navigator {
    /// Start at the first trick of the first round, or `Empty` for a match
    /// without rounds.
    pub fn new(record: Arc<Match>) -> Self {
        let position = Position::start_of(&record);
        Self { record, position }
    }

    pub fn record(&self) -> &Arc<Match> {
        &self.record
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.position.cursor()
    }

    pub fn boundaries(&self) -> Boundaries {
        Boundaries::of(&self.record, self.position)
    }

    pub fn is_terminal(&self) -> bool {
        self.boundaries().is_terminal()
    }

    pub fn is_initial(&self) -> bool {
        self.boundaries().is_initial()
    }

    /// Zero-based index of the current stop in the flattened match timeline.
    pub fn timeline_offset(&self) -> Option<usize> {
        self.cursor().map(|cursor| self.record.timeline_offset(cursor))
    }

    pub fn step_forward(&mut self) -> bool {
        let Position::At(cursor) = self.position else {
            return false;
        };
        let Some(round) = self.record.round(cursor.round_index) else {
            return false;
        };

        let next = if cursor.trick_index < round.last_trick_index() {
            Cursor::new(cursor.round_index, cursor.trick_index + 1)
        } else if cursor.round_index + 1 < self.record.rounds.len() {
            Cursor::new(cursor.round_index + 1, 0)
        } else {
            return false;
        };

        self.move_to(next)
    }

    pub fn step_backward(&mut self) -> bool {
        let Position::At(cursor) = self.position else {
            return false;
        };

        let prev = if cursor.trick_index > 0 {
            Cursor::new(cursor.round_index, cursor.trick_index - 1)
        } else if cursor.round_index > 0 {
            let round_index = cursor.round_index - 1;
            let last = self
                .record
                .round(round_index)
                .map(|r| r.last_trick_index())
                .unwrap_or(0);
            Cursor::new(round_index, last)
        } else {
            return false;
        };

        self.move_to(prev)
    }

    /// Jump to the first trick of round `n`, clamped into range.
    pub fn jump_to_round(&mut self, n: usize) -> bool {
        let Some(last_round) = self.record.last_round_index() else {
            return false;
        };
        let round_index = n.min(last_round);
        if round_index != n {
            debug!(requested = n, round_index, "Clamped round jump");
        }
        self.move_to(Cursor::new(round_index, 0))
    }

    /// Jump to trick `n` of the current round, clamped into range.
    pub fn jump_to_trick(&mut self, n: usize) -> bool {
        let Position::At(cursor) = self.position else {
            return false;
        };
        let last_trick = self
            .record
            .round(cursor.round_index)
            .map(|r| r.last_trick_index())
            .unwrap_or(0);
        let trick_index = n.min(last_trick);
        if trick_index != n {
            debug!(requested = n, trick_index, "Clamped trick jump");
        }
        self.move_to(Cursor::new(cursor.round_index, trick_index))
    }

    fn move_to(&mut self, next: Cursor) -> bool {
        debug_assert!(next.is_valid_for(&self.record));
        let changed = self.position != Position::At(next);
        self.position = Position::At(next);
        if changed {
            debug!(
                round_index = next.round_index,
                trick_index = next.trick_index,
                "Cursor moved"
            );
        }
        changed
    }
}
