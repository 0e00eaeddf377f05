//! Property tests for the navigation controller.
//!
//! Properties tested:
//! - Any command sequence leaves the cursor inside the match
//! - Stepping forward at the terminal trick (or backward at the start) is a no-op
//! - Backward from the first trick of a round lands on the last trick of the previous one
//! - Forward then backward returns to the starting cursor when forward moved

use std::sync::Arc;

use proptest::prelude::*;

use crate::domain::test_gens::{self, proptest_config, NavCommand};
use crate::domain::{Cursor, Navigator, Position};

fn apply(nav: &mut Navigator, command: NavCommand) -> bool {
    match command {
        NavCommand::Forward => nav.step_forward(),
        NavCommand::Backward => nav.step_backward(),
        NavCommand::JumpRound(n) => nav.jump_to_round(n),
        NavCommand::JumpTrick(n) => nav.jump_to_trick(n),
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property: the cursor is always valid, or Empty for a match with no rounds
    #[test]
    fn prop_cursor_always_valid(
        record in test_gens::replay_match(),
        commands in prop::collection::vec(test_gens::nav_command(), 0..40),
    ) {
        let record = Arc::new(record);
        let mut nav = Navigator::new(record.clone());

        for command in commands {
            apply(&mut nav, command);
            match nav.position() {
                Position::Empty => prop_assert!(record.rounds.is_empty()),
                Position::At(cursor) => prop_assert!(cursor.is_valid_for(&record)),
            }
        }
    }

    /// Property: boundary steps leave the cursor unchanged
    #[test]
    fn prop_boundary_idempotence(record in test_gens::playable_match()) {
        let record = Arc::new(record);
        let mut nav = Navigator::new(record.clone());

        prop_assert!(!nav.step_backward());
        prop_assert_eq!(nav.cursor(), Some(Cursor::new(0, 0)));

        let last_round = record.rounds.len() - 1;
        nav.jump_to_round(last_round);
        nav.jump_to_trick(usize::MAX);
        let terminal = nav.cursor();

        prop_assert!(nav.is_terminal());
        prop_assert!(!nav.step_forward());
        prop_assert!(!nav.step_forward());
        prop_assert_eq!(nav.cursor(), terminal);
    }

    /// Property: backward from (r, 0) lands on (r - 1, last trick of r - 1)
    #[test]
    fn prop_round_rollover(record in test_gens::playable_match()) {
        prop_assume!(record.rounds.len() > 1);
        let record = Arc::new(record);

        for r in 1..record.rounds.len() {
            let mut nav = Navigator::new(record.clone());
            nav.jump_to_round(r);
            prop_assert!(nav.step_backward());
            prop_assert_eq!(
                nav.cursor(),
                Some(Cursor::new(r - 1, record.rounds[r - 1].last_trick_index()))
            );
        }
    }

    /// Property: walking forward visits every stop of the timeline exactly once,
    /// including rounds without tricks
    #[test]
    fn prop_forward_walk_covers_timeline(
        record in test_gens::replay_match().prop_filter("match needs a round", |m| !m.is_empty())
    ) {
        let record = Arc::new(record);
        let mut nav = Navigator::new(record.clone());

        let mut visited = vec![nav.cursor()];
        while nav.step_forward() {
            visited.push(nav.cursor());
            let offset = nav.timeline_offset();
            prop_assert_eq!(offset, Some(visited.len() - 1));
            prop_assert!(visited.len() <= record.timeline_len());
        }

        prop_assert_eq!(visited.len(), record.timeline_len());

        // And back again.
        while nav.step_backward() {
            visited.pop();
            prop_assert_eq!(visited.last().copied(), Some(nav.cursor()));
        }
        prop_assert_eq!(visited.len(), 1);
    }
}
