use sortle_core::ItemId;

use crate::Game;

/// Result of [`Game::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Placed items in their expected zone, in puzzle order. Includes items
    /// that were already locked.
    pub correct: Vec<ItemId>,
    /// Placed items outside their expected zone, in puzzle order.
    pub incorrect: Vec<ItemId>,
    /// Items locked by this call. Callers use this to play lock feedback.
    pub newly_locked: Vec<ItemId>,
    /// The orientation used for scoring. Persist it alongside the placements.
    pub mirrored: bool,
    /// Every item is locked after this call.
    pub complete: bool,
}

impl Game {
    /// Checks every placed item and locks the correct ones.
    ///
    /// The orientation is recomputed first unless it has crystallized, and the
    /// resolved orientation is used for the whole call: an item's expected zone
    /// is its canonical zone with left and right swapped when mirrored. After
    /// locking, reveal flags are refreshed and the orientation crystallizes if a
    /// locked item belongs to an exclusive category.
    ///
    /// Returns an empty outcome if the game is already complete.
    pub fn validate(&mut self) -> ValidationOutcome {
        if self.is_complete() {
            log::debug!("ignoring validation: puzzle is complete");
            return ValidationOutcome {
                mirrored: self.orientation.is_mirrored(),
                complete: true,
                ..ValidationOutcome::default()
            };
        }

        self.orientation = self.orientation.resolve(&self.puzzle, &self.placements);
        let mirrored = self.orientation.is_mirrored();

        let mut correct = vec![];
        let mut incorrect = vec![];
        for item in self.puzzle.items() {
            let Some(zone) = self.placements.zone_of(item.id().as_str()) else {
                continue;
            };
            if zone == item.expected_zone(mirrored) {
                correct.push(item.id().clone());
            } else {
                incorrect.push(item.id().clone());
            }
        }

        let mut newly_locked = vec![];
        for id in &correct {
            if self.lock(id) {
                newly_locked.push(id.clone());
            }
        }
        self.settle();

        log::info!(
            "validated puzzle {}: {} correct ({} new), {} incorrect, mirrored={mirrored}",
            self.puzzle.id(),
            correct.len(),
            newly_locked.len(),
            incorrect.len()
        );
        ValidationOutcome {
            correct,
            incorrect,
            newly_locked,
            mirrored,
            complete: self.is_complete(),
        }
    }
}
