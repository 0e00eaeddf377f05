// Proptest generators for replay domain types.
// Generated rounds never repeat a (color, value) pair, matching recorded matches.

use std::env;

use proptest::prelude::*;

use crate::domain::test_state_helpers::{match_from_rounds, roster};
use crate::domain::{Card, Color, Match, Round, ScoreLine, Team, Trick, TrickCard};

/// Case count from `PROPTEST_CASES`, low default for fast CI.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Blue),
        Just(Color::Green),
        Just(Color::Brown),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (color(), 1..=14i32).prop_map(|(color, value)| Card { color, value })
}

/// A shuffled subset of the 56-card deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut deck: Vec<Card> = Color::ALL
            .iter()
            .flat_map(|&color| (1..=14).map(move |value| Card { color, value }))
            .collect();
        // Shuffle and take first N
        for i in 0..count.min(deck.len()) {
            let j = rng.random_range(i..deck.len());
            deck.swap(i, j);
        }
        deck.truncate(count);
        deck
    })
}

/// A round with `seats` active players (drawn from the roster) and up to
/// `max_tricks` tricks. Leads rotate by the trick winner.
pub fn round(max_tricks: usize) -> impl Strategy<Value = Round> {
    (2..=4usize, 0..=max_tricks)
        .prop_flat_map(|(seats, tricks)| {
            (
                Just(seats),
                Just(tricks),
                unique_cards(seats * tricks),
                prop::collection::vec(0..seats, tricks),
                any::<bool>(),
            )
        })
        .prop_map(|(seats, tricks, cards, winners, bet_made)| {
            let names = roster();
            let mut lead = 0usize;
            let mut built = Vec::with_capacity(tricks);
            for t in 0..tricks {
                let plays = (0..seats)
                    .map(|offset| {
                        let seat = (lead + offset) % seats;
                        TrickCard {
                            player_name: names[seat].clone(),
                            card: cards[t * seats + seat],
                        }
                    })
                    .collect();
                let winner = winners[t];
                built.push(Trick {
                    plays,
                    winner_name: names[winner].clone(),
                    points_awarded: 10,
                });
                lead = winner;
            }
            Round {
                tricks: built,
                bet_amount: 100,
                without_trump: false,
                offensive_team: Team::One,
                offensive_points: 0,
                defensive_points: 0,
                bet_made,
                round_score_delta: ScoreLine::new(if bet_made { 100 } else { -100 }, 0),
                trump: Some(Color::Blue),
            }
        })
}

pub fn replay_match() -> impl Strategy<Value = Match> {
    prop::collection::vec(round(6), 0..=4).prop_map(match_from_rounds)
}

/// A non-empty match whose rounds all have at least one trick.
pub fn playable_match() -> impl Strategy<Value = Match> {
    let round_with_tricks = round(6).prop_filter("round needs a trick", |r| !r.tricks.is_empty());
    prop::collection::vec(round_with_tricks, 1..=4).prop_map(match_from_rounds)
}

#[derive(Clone, Copy, Debug)]
pub enum NavCommand {
    Forward,
    Backward,
    JumpRound(usize),
    JumpTrick(usize),
}

pub fn nav_command() -> impl Strategy<Value = NavCommand> {
    prop_oneof![
        3 => Just(NavCommand::Forward),
        3 => Just(NavCommand::Backward),
        1 => (0..10usize).prop_map(NavCommand::JumpRound),
        1 => (0..10usize).prop_map(NavCommand::JumpTrick),
    ]
}
