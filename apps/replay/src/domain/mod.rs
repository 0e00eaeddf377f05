//! Domain layer: pure replay logic types and helpers.

pub mod cards_types;
pub mod cursor;
pub mod hands;
pub mod match_record;
pub mod navigation;
pub mod progress;
pub mod snapshot;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_props_hands;
#[cfg(test)]
mod tests_props_navigation;

// Re-exports for ergonomics
pub use cards_types::{Card, Color, Team};
pub use cursor::{Boundaries, Cursor, Position};
pub use hands::{reconstruct_hands, PlayerHand, RoundHands};
pub use match_record::{Match, Round, ScoreLine, Trick, TrickCard};
pub use navigation::Navigator;
pub use progress::{card_owner_in_trick, played_cards_up_to, PlayedSet};
pub use snapshot::{build_snapshot, CardState, HandView, ReplaySnapshot, TrickView};
pub use summary::{summarize, MatchSummary, RoundSummary};
