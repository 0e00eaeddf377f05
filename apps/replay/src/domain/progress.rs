//! Which cards are gone at a point in the timeline.

use std::collections::HashSet;

use super::cards_types::Card;
use super::match_record::{Round, Trick};

/// Cards already played in a round. Identity is color + value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayedSet {
    cards: HashSet<Card>,
}

impl PlayedSet {
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_subset(&self, other: &PlayedSet) -> bool {
        self.cards.is_subset(&other.cards)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for PlayedSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Cards played in `tricks[0..=trick_index]`.
///
/// `None` means "before the first trick" and yields the empty set, so an
/// unclamped cursor can be passed through. Indexes past the end cover the
/// whole round.
pub fn played_cards_up_to(round: &Round, trick_index: Option<usize>) -> PlayedSet {
    let Some(last) = trick_index else {
        return PlayedSet::default();
    };

    round
        .tricks
        .iter()
        .take(last.saturating_add(1))
        .flat_map(|t| t.plays.iter().map(|p| p.card))
        .collect()
}

/// Who played `card` in `trick`, if anyone.
pub fn card_owner_in_trick<'a>(trick: &'a Trick, card: &Card) -> Option<&'a str> {
    trick
        .plays
        .iter()
        .find(|p| &p.card == card)
        .map(|p| p.player_name.as_str())
}
