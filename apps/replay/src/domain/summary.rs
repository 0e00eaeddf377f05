//! Per-round score table for a finished match.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::cards_types::Team;
use super::match_record::{Match, ScoreLine};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub round_index: usize,
    pub trick_count: usize,
    pub bet_amount: i32,
    pub offensive_team: Team,
    pub trump: String,
    pub bet_made: bool,
    pub score_delta: ScoreLine,
    /// Running total after this round.
    pub running_total: ScoreLine,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub rounds: Vec<RoundSummary>,
    pub final_score: ScoreLine,
    pub winning_team: Team,
    pub total_tricks: usize,
}

/// Summarize every round of `record`.
///
/// The running total is recomputed from the round deltas; a disagreement
/// with the recorded final score is logged, the recorded score is kept.
pub fn summarize(record: &Match) -> MatchSummary {
    let mut running_total = ScoreLine::default();
    let rounds: Vec<RoundSummary> = record
        .rounds
        .iter()
        .enumerate()
        .map(|(round_index, round)| {
            running_total += round.round_score_delta;
            RoundSummary {
                round_index,
                trick_count: round.tricks.len(),
                bet_amount: round.bet_amount,
                offensive_team: round.offensive_team,
                trump: round.trump_label(),
                bet_made: round.bet_made,
                score_delta: round.round_score_delta,
                running_total,
            }
        })
        .collect();

    if !rounds.is_empty() && running_total != record.final_score {
        warn!(
            computed_team1 = running_total.team1,
            computed_team2 = running_total.team2,
            recorded_team1 = record.final_score.team1,
            recorded_team2 = record.final_score.team2,
            "Round deltas do not add up to the recorded final score"
        );
    }

    MatchSummary {
        rounds,
        final_score: record.final_score,
        winning_team: record.winning_team,
        total_tricks: record.total_tricks(),
    }
}
