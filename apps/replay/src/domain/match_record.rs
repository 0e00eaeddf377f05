//! Recorded match types: the immutable log a replay is built from.
//!
//! A `Match` is produced once by the live game when it finishes and is only
//! ever read by the replay engine. The JSON wire format is camelCase.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Color, Team};
use super::cursor::Cursor;

/// One play within a trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickCard {
    /// Display name of the player. This is the identity key; session ids churn.
    pub player_name: String,
    pub card: Card,
}

/// A completed trick. `plays` is in play order, lead card first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    pub plays: Vec<TrickCard>,
    pub winner_name: String,
    pub points_awarded: i32,
}

impl Trick {
    pub fn lead(&self) -> Option<&TrickCard> {
        self.plays.first()
    }
}

/// Per-team score pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub team1: i32,
    pub team2: i32,
}

impl ScoreLine {
    pub const fn new(team1: i32, team2: i32) -> Self {
        Self { team1, team2 }
    }

    pub fn for_team(&self, team: Team) -> i32 {
        match team {
            Team::One => self.team1,
            Team::Two => self.team2,
        }
    }
}

/// Saturates at the `i32` bounds; records are not range-checked on load.
impl Add for ScoreLine {
    type Output = ScoreLine;

    fn add(self, rhs: ScoreLine) -> ScoreLine {
        ScoreLine {
            team1: self.team1.saturating_add(rhs.team1),
            team2: self.team2.saturating_add(rhs.team2),
        }
    }
}

impl AddAssign for ScoreLine {
    fn add_assign(&mut self, rhs: ScoreLine) {
        *self = *self + rhs;
    }
}

/// One scored hand of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub tricks: Vec<Trick>,
    pub bet_amount: i32,
    pub without_trump: bool,
    pub offensive_team: Team,
    pub offensive_points: i32,
    pub defensive_points: i32,
    pub bet_made: bool,
    pub round_score_delta: ScoreLine,
    #[serde(default)]
    pub trump: Option<Color>,
}

impl Round {
    /// Index of the final trick. Saturates at 0 for a round with no tricks.
    pub fn last_trick_index(&self) -> usize {
        self.tricks.len().saturating_sub(1)
    }

    /// Cursor stops in this round. A round without tricks still has one.
    pub fn stop_count(&self) -> usize {
        self.tricks.len().max(1)
    }

    pub fn trick(&self, index: usize) -> Option<&Trick> {
        self.tricks.get(index)
    }

    /// Trump as shown to an observer.
    pub fn trump_label(&self) -> String {
        match (self.without_trump, self.trump) {
            (true, _) | (false, None) => "no trump".to_string(),
            (false, Some(color)) => color.to_string(),
        }
    }

    /// Names of everyone who played at least one card, in first-play order.
    pub fn participants(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for play in self.tricks.iter().flat_map(|t| t.plays.iter()) {
            if !names.contains(&play.player_name.as_str()) {
                names.push(play.player_name.as_str());
            }
        }
        names
    }
}

/// A finished match. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub rounds: Vec<Round>,
    pub player_names: Vec<String>,
    /// Parallel to `player_names`.
    pub player_teams: Vec<Team>,
    pub final_score: ScoreLine,
    pub winning_team: Team,
}

impl Match {
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn last_round_index(&self) -> Option<usize> {
        self.rounds.len().checked_sub(1)
    }

    /// Team of a rostered player. Substitutes outside the roster have none.
    pub fn team_of(&self, player_name: &str) -> Option<Team> {
        self.player_names
            .iter()
            .position(|n| n == player_name)
            .and_then(|idx| self.player_teams.get(idx).copied())
    }

    /// Number of tricks actually played across all rounds.
    pub fn total_tricks(&self) -> usize {
        self.rounds.iter().map(|r| r.tricks.len()).sum()
    }

    /// Number of cursor stops in the flattened match timeline.
    pub fn timeline_len(&self) -> usize {
        self.rounds.iter().map(Round::stop_count).sum()
    }

    /// Zero-based position of `cursor` in the flattened timeline.
    pub fn timeline_offset(&self, cursor: Cursor) -> usize {
        let before: usize = self
            .rounds
            .iter()
            .take(cursor.round_index)
            .map(Round::stop_count)
            .sum();
        before + cursor.trick_index
    }
}
