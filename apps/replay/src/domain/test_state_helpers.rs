// Builders for small hand-written matches used by domain unit tests.

use std::sync::Arc;

use crate::domain::{Card, Color, Match, Round, ScoreLine, Team, Trick, TrickCard};

pub type PlaySpec<'a> = (&'a str, Color, i32);

pub fn roster() -> Vec<String> {
    ["Ann", "Bob", "Cat", "Dan"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn trick_from(plays: &[PlaySpec<'_>]) -> Trick {
    Trick {
        plays: plays
            .iter()
            .map(|(name, color, value)| TrickCard {
                player_name: name.to_string(),
                card: Card::new(*color, *value),
            })
            .collect(),
        winner_name: plays.first().map(|p| p.0.to_string()).unwrap_or_default(),
        points_awarded: 10,
    }
}

pub fn round_from_tricks(tricks: &[&[PlaySpec<'_>]]) -> Round {
    Round {
        tricks: tricks.iter().map(|plays| trick_from(plays)).collect(),
        bet_amount: 100,
        without_trump: false,
        offensive_team: Team::One,
        offensive_points: 110,
        defensive_points: 70,
        bet_made: true,
        round_score_delta: ScoreLine::new(110, 70),
        trump: Some(Color::Red),
    }
}

/// Round with `tricks` full four-player tricks and distinct cards.
pub fn full_round(tricks: usize, seed_value: i32) -> Round {
    let names = roster();
    let mut built = Vec::with_capacity(tricks);
    for t in 0..tricks {
        let plays: Vec<TrickCard> = names
            .iter()
            .enumerate()
            .map(|(seat, name)| TrickCard {
                player_name: name.clone(),
                card: Card::new(Color::ALL[seat], seed_value + t as i32),
            })
            .collect();
        built.push(Trick {
            winner_name: names[t % names.len()].clone(),
            plays,
            points_awarded: 5,
        });
    }
    Round {
        tricks: built,
        ..round_from_tricks(&[])
    }
}

pub fn match_from_rounds(rounds: Vec<Round>) -> Match {
    let final_score = rounds
        .iter()
        .fold(ScoreLine::default(), |acc, r| acc + r.round_score_delta);
    Match {
        rounds,
        player_names: roster(),
        player_teams: vec![Team::One, Team::Two, Team::One, Team::Two],
        final_score,
        winning_team: if final_score.team1 >= final_score.team2 {
            Team::One
        } else {
            Team::Two
        },
    }
}

/// Two rounds: three tricks then two tricks, four plays each.
pub fn two_round_match() -> Arc<Match> {
    Arc::new(match_from_rounds(vec![full_round(3, 1), full_round(2, 20)]))
}

pub fn empty_match() -> Arc<Match> {
    Arc::new(match_from_rounds(vec![]))
}
