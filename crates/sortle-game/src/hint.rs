use std::collections::BTreeSet;

use sortle_core::{InsertAnchor, ItemId, Puzzle, Zone};

use crate::{Game, Placements};

impl Game {
    /// Auto-corrects one placed item and locks it.
    ///
    /// Eligible items are placed, unlocked, and not in [`Zone::Outside`].
    /// Misplaced items are preferred over correctly placed ones, with ties broken
    /// by puzzle order. The chosen item is appended to its expected zone, locked,
    /// and reveal flags and orientation are refreshed as in [`Game::validate`].
    ///
    /// Returns the hinted item, or `None` if nothing is eligible or the game is
    /// complete.
    pub fn reveal_hint(&mut self) -> Option<ItemId> {
        if self.is_complete() {
            log::debug!("ignoring hint: puzzle is complete");
            return None;
        }

        self.orientation = self.orientation.resolve(&self.puzzle, &self.placements);
        let mirrored = self.orientation.is_mirrored();
        let Some((id, expected)) =
            find_hint_target(&self.puzzle, &self.placements, &self.locked, mirrored)
        else {
            log::debug!("no hint available");
            return None;
        };

        self.placements = self
            .placements
            .with_placed(&id, expected, &InsertAnchor::End);
        self.lock(&id);
        self.settle();
        log::info!("hint moved {id} to {expected}");
        Some(id)
    }
}

/// Picks the item a hint should correct, along with its expected zone.
#[must_use]
pub fn find_hint_target(
    puzzle: &Puzzle,
    placements: &Placements,
    locked: &BTreeSet<ItemId>,
    mirrored: bool,
) -> Option<(ItemId, Zone)> {
    let mut first_correct = None;
    for item in puzzle.items() {
        if locked.contains(item.id()) {
            continue;
        }
        let Some(zone) = placements.zone_of(item.id().as_str()) else {
            continue;
        };
        if zone == Zone::Outside {
            continue;
        }
        let expected = item.expected_zone(mirrored);
        if zone != expected {
            return Some((item.id().clone(), expected));
        }
        first_correct.get_or_insert_with(|| (item.id().clone(), expected));
    }
    first_correct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_puzzle;

    #[test]
    fn nothing_eligible_returns_none() {
        let mut game = Game::new(sample_puzzle());
        assert_eq!(game.reveal_hint(), None);

        game.place_item("l1", Zone::Outside, &InsertAnchor::End);
        assert_eq!(game.reveal_hint(), None, "outside placements are not hinted");
        assert!(game.locked().is_empty());
    }

    #[test]
    fn prefers_misplaced_item() {
        let mut game = Game::new(sample_puzzle());
        game.place_item("l1", Zone::Left, &InsertAnchor::End);
        game.place_item("b1", Zone::Left, &InsertAnchor::Start);

        assert_eq!(game.reveal_hint(), Some(ItemId::from("b1")));
        assert!(game.is_locked("b1"));
        assert_eq!(game.placements().zone_of("b1"), Some(Zone::Both));
        assert!(!game.is_locked("l1"));

        assert_eq!(game.reveal_hint(), Some(ItemId::from("l1")));
        assert!(game.is_locked("l1"));
        assert_eq!(game.placements().order(Zone::Left), [ItemId::from("l1")]);
    }

    #[test]
    fn ties_follow_puzzle_order() {
        let mut game = Game::new(sample_puzzle());
        game.place_item("r2", Zone::Both, &InsertAnchor::End);
        game.place_item("r1", Zone::Both, &InsertAnchor::End);
        assert_eq!(game.reveal_hint(), Some(ItemId::from("r1")));
    }

    #[test]
    fn hint_uses_mirrored_expectation() {
        let mut game = Game::new(sample_puzzle());
        game.place_item("l1", Zone::Right, &InsertAnchor::End);
        game.place_item("r1", Zone::Left, &InsertAnchor::End);
        game.validate();

        game.place_item("l2", Zone::Both, &InsertAnchor::End);
        assert_eq!(game.reveal_hint(), Some(ItemId::from("l2")));
        assert_eq!(game.placements().zone_of("l2"), Some(Zone::Right));
        assert_eq!(
            game.placements().order(Zone::Right),
            [ItemId::from("l1"), ItemId::from("l2")]
        );
    }

    #[test]
    fn hint_counts_toward_reveal() {
        let mut game = Game::new(sample_puzzle());
        for id in ["l1", "l2", "l3"] {
            game.place_item(id, Zone::Both, &InsertAnchor::End);
        }
        for _ in 0..3 {
            assert!(game.reveal_hint().is_some());
        }
        assert!(game.reveal().left);
        assert_eq!(game.placements().order(Zone::Left).len(), 3);
    }
}
