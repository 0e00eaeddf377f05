//! Derived, renderable view of a replay position.
//!
//! Renderers, sound cues and "jump to round" UIs read this and the raw
//! position; they never reconstruct hands or played sets themselves.

use serde::{Deserialize, Serialize};

use crate::domain::cursor::{Boundaries, Cursor, Position};
use crate::domain::hands::RoundHands;
use crate::domain::match_record::{Match, Round, ScoreLine, Trick, TrickCard};
use crate::domain::progress::{played_cards_up_to, PlayedSet};
use crate::domain::{Card, Team};

/// Public facts about the round in view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundHeader {
    pub round_index: usize,
    pub trick_count: usize,
    pub bet_amount: i32,
    pub offensive_team: Team,
    pub trump: String,
    pub bet_made: bool,
    pub offensive_points: i32,
    pub defensive_points: i32,
    pub score_delta: ScoreLine,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickView {
    pub trick_index: usize,
    pub plays: Vec<TrickCard>,
    pub winner_name: String,
    pub points_awarded: i32,
}

impl TrickView {
    fn from_trick(trick_index: usize, trick: &Trick) -> Self {
        Self {
            trick_index,
            plays: trick.plays.clone(),
            winner_name: trick.winner_name.clone(),
            points_awarded: trick.points_awarded,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardState {
    /// Still in the player's hand at this point.
    Held,
    /// Played into the trick currently in view.
    InCurrentTrick,
    /// Played in an earlier trick.
    Played,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandCardView {
    pub card: Card,
    pub state: CardState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandView {
    pub player_name: String,
    pub team: Option<Team>,
    pub substitute: bool,
    pub cards: Vec<HandCardView>,
}

impl HandView {
    pub fn held(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(|c| c.state == CardState::Held)
            .map(|c| &c.card)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub offset: usize,
    pub total: usize,
}

/// Everything a renderer needs for one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySnapshot {
    pub position: Position,
    pub boundaries: Boundaries,
    pub timeline: Timeline,
    pub round: Option<RoundHeader>,
    pub current_trick: Option<TrickView>,
    /// The trick before the current one in the same round.
    pub previous_trick: Option<TrickView>,
    pub hands: Vec<HandView>,
    pub scores_before_round: ScoreLine,
    pub scores_after_round: ScoreLine,
}

impl ReplaySnapshot {
    /// "Nothing to show": the sentinel for a match without rounds.
    pub fn empty() -> Self {
        Self {
            position: Position::Empty,
            boundaries: Boundaries::default(),
            timeline: Timeline::default(),
            round: None,
            current_trick: None,
            previous_trick: None,
            hands: Vec::new(),
            scores_before_round: ScoreLine::default(),
            scores_after_round: ScoreLine::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position == Position::Empty
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.position.cursor()
    }

    pub fn hand(&self, player_name: &str) -> Option<&HandView> {
        self.hands.iter().find(|h| h.player_name == player_name)
    }
}

/// Build the snapshot for `cursor` given the round's reconstructed hands.
///
/// Never panics; a cursor outside `record` produces the empty snapshot.
pub fn build_snapshot(record: &Match, cursor: Cursor, hands: &RoundHands) -> ReplaySnapshot {
    let Some(round) = record.round(cursor.round_index) else {
        return ReplaySnapshot::empty();
    };
    let position = Position::At(cursor);

    let current = round.trick(cursor.trick_index);
    let current_trick = current.map(|t| TrickView::from_trick(cursor.trick_index, t));
    let previous_trick = cursor
        .trick_index
        .checked_sub(1)
        .and_then(|i| round.trick(i).map(|t| TrickView::from_trick(i, t)));

    let played_through = current.map(|_| cursor.trick_index);
    let played = played_cards_up_to(round, played_through);

    let hand_views = hands
        .iter()
        .map(|hand| HandView {
            player_name: hand.player_name.clone(),
            team: record.team_of(&hand.player_name),
            substitute: hand.substitute,
            cards: hand
                .cards
                .iter()
                .map(|card| HandCardView {
                    card: *card,
                    state: card_state(card, &hand.player_name, current, &played),
                })
                .collect(),
        })
        .collect();

    let scores_before_round = record
        .rounds
        .iter()
        .take(cursor.round_index)
        .fold(ScoreLine::default(), |acc, r| acc + r.round_score_delta);
    ReplaySnapshot {
        position,
        boundaries: Boundaries::of(record, position),
        timeline: Timeline {
            offset: record.timeline_offset(cursor),
            total: record.timeline_len(),
        },
        round: Some(round_header(cursor.round_index, round)),
        current_trick,
        previous_trick,
        hands: hand_views,
        scores_before_round,
        scores_after_round: scores_before_round + round.round_score_delta,
    }
}

fn card_state(
    card: &Card,
    player_name: &str,
    current: Option<&Trick>,
    played: &PlayedSet,
) -> CardState {
    let in_current = current
        .map(|t| {
            t.plays
                .iter()
                .any(|p| p.player_name == player_name && &p.card == card)
        })
        .unwrap_or(false);

    if in_current {
        CardState::InCurrentTrick
    } else if played.contains(card) {
        CardState::Played
    } else {
        CardState::Held
    }
}

fn round_header(round_index: usize, round: &Round) -> RoundHeader {
    RoundHeader {
        round_index,
        trick_count: round.tricks.len(),
        bet_amount: round.bet_amount,
        offensive_team: round.offensive_team,
        trump: round.trump_label(),
        bet_made: round.bet_made,
        offensive_points: round.offensive_points,
        defensive_points: round.defensive_points,
        score_delta: round.round_score_delta,
    }
}
