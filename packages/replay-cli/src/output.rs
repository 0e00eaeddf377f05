//! Plain-text rendering for summaries and snapshots.

use std::fmt::{Display, Formatter, Result as FmtResult};

use replay::domain::{CardState, HandView, MatchSummary, ReplaySnapshot, TrickView};

/// Per-round table followed by the final score line.
pub struct SummaryTable<'a>(pub &'a MatchSummary);

impl Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let summary = self.0;
        writeln!(
            f,
            "{:>5}  {:>6}  {:>4}  {:<8}  {:<9}  {:>5}  {:>11}  {:>11}",
            "round", "tricks", "bet", "offense", "trump", "made", "delta", "total"
        )?;
        for round in &summary.rounds {
            writeln!(
                f,
                "{:>5}  {:>6}  {:>4}  {:<8}  {:<9}  {:>5}  {:>5}/{:<5}  {:>5}/{:<5}",
                round.round_index,
                round.trick_count,
                round.bet_amount,
                round.offensive_team.to_string(),
                round.trump,
                if round.bet_made { "yes" } else { "no" },
                round.score_delta.team1,
                round.score_delta.team2,
                round.running_total.team1,
                round.running_total.team2,
            )?;
        }
        writeln!(
            f,
            "Final score: {} - {} ({} wins, {} tricks played)",
            summary.final_score.team1,
            summary.final_score.team2,
            summary.winning_team,
            summary.total_tricks
        )
    }
}

/// Human-readable view of one replay position.
pub struct SnapshotText<'a>(pub &'a ReplaySnapshot);

impl Display for SnapshotText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let snapshot = self.0;
        let (Some(cursor), Some(round)) = (snapshot.cursor(), snapshot.round.as_ref()) else {
            return writeln!(f, "No rounds were completed in this match.");
        };

        writeln!(
            f,
            "Round {} trick {} [{}/{}] | bet {} by {}, {}",
            cursor.round_index + 1,
            cursor.trick_index + 1,
            snapshot.timeline.offset + 1,
            snapshot.timeline.total,
            round.bet_amount,
            round.offensive_team,
            round.trump
        )?;
        writeln!(
            f,
            "Score before round: {} - {}",
            snapshot.scores_before_round.team1, snapshot.scores_before_round.team2
        )?;

        match &snapshot.current_trick {
            Some(trick) => write_trick(f, trick)?,
            None => writeln!(f, "Trick: none played")?,
        }
        for hand in &snapshot.hands {
            write_hand(f, hand)?;
        }
        Ok(())
    }
}

fn write_trick(f: &mut Formatter<'_>, trick: &TrickView) -> FmtResult {
    write!(f, "Trick: ")?;
    for (i, play) in trick.plays.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{} {}", play.player_name, play.card)?;
    }
    writeln!(f, " -> {} (+{})", trick.winner_name, trick.points_awarded)
}

fn write_hand(f: &mut Formatter<'_>, hand: &HandView) -> FmtResult {
    write!(f, "  {}", hand.player_name)?;
    if hand.substitute {
        write!(f, " (substitute)")?;
    }
    match hand.team {
        Some(team) => write!(f, " [{team}]:")?,
        None => write!(f, " [no team]:")?,
    }
    for card in &hand.cards {
        match card.state {
            CardState::Held => write!(f, " {}", card.card)?,
            CardState::InCurrentTrick => write!(f, " *{}", card.card)?,
            CardState::Played => write!(f, " ({})", card.card)?,
        }
    }
    writeln!(f)
}
