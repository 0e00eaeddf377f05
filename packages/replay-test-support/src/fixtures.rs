//! Builders for recorded matches.
//!
//! ```
//! use replay::Color;
//! use replay_test_support::fixtures::{MatchBuilder, RoundBuilder};
//!
//! let record = MatchBuilder::new()
//!     .round(
//!         RoundBuilder::new()
//!             .trick(&[("Ann", Color::Red, 5), ("Bob", Color::Red, 9)], "Bob")
//!             .build(),
//!     )
//!     .build();
//! assert_eq!(record.rounds.len(), 1);
//! ```

use replay::{Card, Color, Match, Round, ScoreLine, Team, Trick, TrickCard};

pub const DEFAULT_ROSTER: [&str; 4] = ["Ann", "Bob", "Cat", "Dan"];

pub type Play<'a> = (&'a str, Color, i32);

pub fn trick(plays: &[Play<'_>], winner: &str) -> Trick {
    Trick {
        plays: plays
            .iter()
            .map(|(name, color, value)| TrickCard {
                player_name: name.to_string(),
                card: Card::new(*color, *value),
            })
            .collect(),
        winner_name: winner.to_string(),
        points_awarded: 0,
    }
}

#[derive(Debug, Clone)]
pub struct RoundBuilder {
    round: Round,
}

impl Default for RoundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundBuilder {
    pub fn new() -> Self {
        Self {
            round: Round {
                tricks: Vec::new(),
                bet_amount: 100,
                without_trump: false,
                offensive_team: Team::One,
                offensive_points: 0,
                defensive_points: 0,
                bet_made: true,
                round_score_delta: ScoreLine::default(),
                trump: Some(Color::Red),
            },
        }
    }

    pub fn trick(mut self, plays: &[Play<'_>], winner: &str) -> Self {
        self.round.tricks.push(trick(plays, winner));
        self
    }

    /// Append `count` four-player tricks using the default roster. Card
    /// values start at `first_value` and never repeat within the round.
    pub fn full_tricks(mut self, count: usize, first_value: i32) -> Self {
        let start = self.round.tricks.len();
        for t in 0..count {
            let value = first_value + (start + t) as i32;
            let plays: Vec<Play<'_>> = DEFAULT_ROSTER
                .iter()
                .zip(Color::ALL)
                .map(|(name, color)| (*name, color, value))
                .collect();
            let winner = DEFAULT_ROSTER[(start + t) % DEFAULT_ROSTER.len()];
            self.round.tricks.push(trick(&plays, winner));
        }
        self
    }

    pub fn bet(mut self, amount: i32, offensive_team: Team, made: bool) -> Self {
        self.round.bet_amount = amount;
        self.round.offensive_team = offensive_team;
        self.round.bet_made = made;
        self
    }

    pub fn trump(mut self, trump: Option<Color>) -> Self {
        self.round.without_trump = trump.is_none();
        self.round.trump = trump;
        self
    }

    pub fn score_delta(mut self, team1: i32, team2: i32) -> Self {
        self.round.round_score_delta = ScoreLine::new(team1, team2);
        self
    }

    pub fn build(self) -> Round {
        self.round
    }
}

#[derive(Debug, Clone)]
pub struct MatchBuilder {
    rounds: Vec<Round>,
    roster: Vec<(String, Team)>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    /// Default roster: Ann and Cat on team 1, Bob and Dan on team 2.
    pub fn new() -> Self {
        let roster = DEFAULT_ROSTER
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let team = if i % 2 == 0 { Team::One } else { Team::Two };
                (name.to_string(), team)
            })
            .collect();
        Self {
            rounds: Vec::new(),
            roster,
        }
    }

    pub fn roster(mut self, roster: &[(&str, Team)]) -> Self {
        self.roster = roster
            .iter()
            .map(|(name, team)| (name.to_string(), *team))
            .collect();
        self
    }

    pub fn round(mut self, round: Round) -> Self {
        self.rounds.push(round);
        self
    }

    /// Final score is the sum of round deltas; ties go to team 1.
    pub fn build(self) -> Match {
        let final_score = self
            .rounds
            .iter()
            .fold(ScoreLine::default(), |acc, r| acc + r.round_score_delta);
        let winning_team = if final_score.team2 > final_score.team1 {
            Team::Two
        } else {
            Team::One
        };
        Match {
            rounds: self.rounds,
            player_names: self.roster.iter().map(|(n, _)| n.clone()).collect(),
            player_teams: self.roster.iter().map(|(_, t)| *t).collect(),
            final_score,
            winning_team,
        }
    }
}

/// Two rounds: three full tricks, then two full tricks.
pub fn two_round_match() -> Match {
    MatchBuilder::new()
        .round(RoundBuilder::new().full_tricks(3, 1).score_delta(120, 60).build())
        .round(RoundBuilder::new().full_tricks(2, 1).score_delta(-100, 80).build())
        .build()
}
