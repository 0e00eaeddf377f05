//! Hand reconstruction from the play log.
//!
//! A recorded match never stores hands. Each round deals a fixed hand and
//! every card in it is played exactly once, so the cards a player is
//! recorded as playing, in trick order then play order, are exactly the hand
//! they held when the round started.

use tracing::warn;

use super::cards_types::Card;
use super::match_record::Round;

/// One player's reconstructed round-starting hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerHand {
    pub player_name: String,
    /// Cards in the order they were played.
    pub cards: Vec<Card>,
    /// True when the name was not on the roster (mid-round bot substitution).
    pub substitute: bool,
}

/// Ordered mapping player name -> hand.
///
/// Roster players come first in roster order; unrostered names follow in the
/// order they were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundHands {
    hands: Vec<PlayerHand>,
}

impl RoundHands {
    pub fn get(&self, player_name: &str) -> Option<&[Card]> {
        self.hands
            .iter()
            .find(|h| h.player_name == player_name)
            .map(|h| h.cards.as_slice())
    }

    pub fn contains(&self, player_name: &str) -> bool {
        self.hands.iter().any(|h| h.player_name == player_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerHand> {
        self.hands.iter()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.hands.iter().flat_map(|h| h.cards.iter())
    }

    /// Names that were created lazily because they were not on the roster.
    pub fn substitutes(&self) -> impl Iterator<Item = &str> {
        self.hands
            .iter()
            .filter(|h| h.substitute)
            .map(|h| h.player_name.as_str())
    }

    fn slot_mut(&mut self, player_name: &str) -> Option<&mut PlayerHand> {
        self.hands.iter_mut().find(|h| h.player_name == player_name)
    }
}

impl<'a> IntoIterator for &'a RoundHands {
    type Item = &'a PlayerHand;
    type IntoIter = std::slice::Iter<'a, PlayerHand>;

    fn into_iter(self) -> Self::IntoIter {
        self.hands.iter()
    }
}

/// Reconstruct every player's starting hand for `round`.
///
/// Roster players who never appear in the round's tricks get no entry.
/// `round_index` is only used for diagnostics.
pub fn reconstruct_hands(round: &Round, roster: &[String], round_index: usize) -> RoundHands {
    let mut hands = RoundHands::default();

    for name in roster {
        let appears = round
            .tricks
            .iter()
            .any(|t| t.plays.iter().any(|p| &p.player_name == name));
        if appears && !hands.contains(name) {
            hands.hands.push(PlayerHand {
                player_name: name.clone(),
                cards: Vec::new(),
                substitute: false,
            });
        }
    }

    for (trick_index, trick) in round.tricks.iter().enumerate() {
        for play in &trick.plays {
            match hands.slot_mut(&play.player_name) {
                Some(slot) => slot.cards.push(play.card),
                None => {
                    warn!(
                        round_index,
                        trick_index,
                        player_name = %play.player_name,
                        "Player not on roster; creating hand lazily"
                    );
                    hands.hands.push(PlayerHand {
                        player_name: play.player_name.clone(),
                        cards: vec![play.card],
                        substitute: true,
                    });
                }
            }
        }
    }

    hands
}
