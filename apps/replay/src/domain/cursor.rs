//! Replay position and its boundary flags.

use serde::{Deserialize, Serialize};

use super::match_record::Match;

/// A (round, trick) position inside a non-empty match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub round_index: usize,
    pub trick_index: usize,
}

impl Cursor {
    pub const fn new(round_index: usize, trick_index: usize) -> Self {
        Self {
            round_index,
            trick_index,
        }
    }

    /// Whether this cursor points inside `record`.
    pub fn is_valid_for(&self, record: &Match) -> bool {
        match record.round(self.round_index) {
            Some(round) => self.trick_index <= round.last_trick_index(),
            None => false,
        }
    }
}

/// Where the observer is. `Empty` is the sentinel for a match with no rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "cursor", rename_all = "camelCase")]
pub enum Position {
    Empty,
    At(Cursor),
}

impl Position {
    /// Starting position for a match: first trick of the first round.
    pub fn start_of(record: &Match) -> Self {
        if record.is_empty() {
            Position::Empty
        } else {
            Position::At(Cursor::default())
        }
    }

    pub fn cursor(&self) -> Option<Cursor> {
        match self {
            Position::Empty => None,
            Position::At(c) => Some(*c),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundaries {
    pub has_next_trick: bool,
    pub has_prev_trick: bool,
    pub has_next_round: bool,
    pub has_prev_round: bool,
}

impl Boundaries {
    pub fn of(record: &Match, position: Position) -> Self {
        let Position::At(cursor) = position else {
            return Boundaries::default();
        };
        let Some(round) = record.round(cursor.round_index) else {
            return Boundaries::default();
        };

        Boundaries {
            has_next_trick: cursor.trick_index < round.last_trick_index(),
            has_prev_trick: cursor.trick_index > 0,
            has_next_round: cursor.round_index + 1 < record.rounds.len(),
            has_prev_round: cursor.round_index > 0,
        }
    }

    /// Nothing further forward: last trick of the last round.
    pub fn is_terminal(&self) -> bool {
        !self.has_next_trick && !self.has_next_round
    }

    pub fn is_initial(&self) -> bool {
        !self.has_prev_trick && !self.has_prev_round
    }
}
