//! Property tests for hand reconstruction and play progress (pure domain).
//!
//! Properties tested:
//! - Reconstruction conserves cards: no card created, dropped, or duplicated
//! - Every hand preserves the recorded play order
//! - Played sets grow monotonically with the trick index
//! - An unrostered player always gets a hand instead of failing

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::test_gens::{self, proptest_config};
use crate::domain::test_state_helpers::roster;
use crate::domain::{played_cards_up_to, reconstruct_hands, Card, TrickCard};

fn multiset<'a>(cards: impl Iterator<Item = &'a Card>) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property: union of hands equals union of played cards
    #[test]
    fn prop_hand_conservation(round in test_gens::round(8)) {
        let hands = reconstruct_hands(&round, &roster(), 0);

        let from_hands = multiset(hands.all_cards());
        let from_tricks = multiset(round.tricks.iter().flat_map(|t| t.plays.iter().map(|p| &p.card)));

        prop_assert_eq!(from_hands, from_tricks);
    }

    /// Property: a player's hand lists their cards in trick order
    #[test]
    fn prop_hand_order_matches_play_log(round in test_gens::round(8)) {
        let hands = reconstruct_hands(&round, &roster(), 0);

        for hand in &hands {
            let expected: Vec<Card> = round
                .tricks
                .iter()
                .flat_map(|t| t.plays.iter())
                .filter(|p| p.player_name == hand.player_name)
                .map(|p| p.card)
                .collect();
            prop_assert_eq!(&hand.cards, &expected);
        }
    }

    /// Property: played(k) is a subset of played(k + 1); played(None) is empty
    #[test]
    fn prop_played_set_monotonic(round in test_gens::round(8)) {
        prop_assert!(played_cards_up_to(&round, None).is_empty());

        for k in 0..round.tricks.len() {
            let now = played_cards_up_to(&round, Some(k));
            let next = played_cards_up_to(&round, Some(k + 1));
            prop_assert!(now.is_subset(&next));
        }

        if let Some(first) = round.tricks.first() {
            let played = played_cards_up_to(&round, Some(0));
            prop_assert_eq!(played.len(), first.plays.len());
        }
    }

    /// Property: a substitute's plays land in its own lazily created hand
    #[test]
    fn prop_substitute_gets_hand(
        mut round in test_gens::round(4).prop_filter("needs a trick", |r| !r.tricks.is_empty()),
        card in test_gens::card(),
    ) {
        prop_assume!(!round.tricks.iter().any(|t| t.plays.iter().any(|p| p.card == card)));

        round.tricks[0].plays.push(TrickCard {
            player_name: "Bot 2".to_string(),
            card,
        });

        let hands = reconstruct_hands(&round, &roster(), 0);

        prop_assert_eq!(hands.get("Bot 2"), Some(&[card][..]));
        prop_assert_eq!(hands.substitutes().collect::<Vec<_>>(), vec!["Bot 2"]);
    }
}
