use std::collections::{BTreeMap, BTreeSet};

use sortle_core::{InsertAnchor, Item, ItemId, Puzzle, Zone, ZoneArray};

use crate::{
    Orientation, Placements, PlacementsError, RevealFlags, orientation::crystallization_due,
};

/// A sorting puzzle session.
///
/// Owns the puzzle definition and the player's progress: placements, the set
/// of locked items, revealed category labels and the solving orientation.
/// Every operation completes synchronously and never fails; invalid requests
/// (locked items, finished puzzles, unknown items) are ignored and reported
/// through the returned outcome.
///
/// Once every item is locked the game is *complete* and frozen: all mutating
/// operations become no-ops.
///
/// # Example
///
/// ```
/// use sortle_core::{InsertAnchor, Item, Puzzle, Zone};
/// use sortle_game::Game;
///
/// let items = (0..Puzzle::ITEM_COUNT)
///     .map(|i| Item::new(format!("i{i}"), format!("Item {i}"), Zone::ALL[i % 4]))
///     .collect();
/// let puzzle = Puzzle::new("demo", "Left", "Right", items).unwrap();
/// let mut game = Game::new(puzzle);
///
/// game.place_item("i2", Zone::Both, &InsertAnchor::End);
/// game.place_item("i3", Zone::Left, &InsertAnchor::End);
///
/// let outcome = game.validate();
/// assert_eq!(outcome.correct.len(), 1);
/// assert_eq!(outcome.incorrect.len(), 1);
/// assert!(game.is_locked("i2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) puzzle: Puzzle,
    pub(crate) placements: Placements,
    pub(crate) locked: BTreeSet<ItemId>,
    pub(crate) reveal: RevealFlags,
    pub(crate) orientation: Orientation,
}

impl Game {
    /// Starts a fresh session with nothing placed.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        log::info!("starting puzzle {}", puzzle.id());
        Self {
            puzzle,
            placements: Placements::new(),
            locked: BTreeSet::new(),
            reveal: RevealFlags::default(),
            orientation: Orientation::default(),
        }
    }

    /// Restores a session from a snapshot.
    ///
    /// The snapshot replaces all progress at once. The orientation is restored
    /// as crystallized when any locked item belongs to an exclusive category.
    /// Reveal flags are taken from the snapshot and topped up from the locked set.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::UnknownItem`] if the snapshot names an item the
    /// puzzle does not define.
    /// Returns [`SnapshotError::Placements`] if the mapping and zone orders disagree.
    /// Returns [`SnapshotError::LockedUnplaced`] or [`SnapshotError::LockedMisplaced`]
    /// if a locked item is not placed in its expected zone.
    pub fn from_snapshot(puzzle: Puzzle, snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let GameSnapshot {
            placements,
            zone_order,
            locked,
            reveal,
            mirrored,
        } = snapshot;

        let named = placements
            .keys()
            .chain(zone_order.values().flatten())
            .chain(&locked);
        for id in named {
            if !puzzle.contains(id.as_str()) {
                return Err(SnapshotError::UnknownItem { id: id.clone() });
            }
        }

        let placements = Placements::from_parts(placements, zone_order)?;
        let locked: BTreeSet<ItemId> = locked.into_iter().collect();
        for id in &locked {
            let Some(zone) = placements.zone_of(id.as_str()) else {
                return Err(SnapshotError::LockedUnplaced { id: id.clone() });
            };
            let expected = puzzle
                .item(id.as_str())
                .map(|item| item.expected_zone(mirrored));
            if expected != Some(zone) {
                return Err(SnapshotError::LockedMisplaced { id: id.clone() });
            }
        }

        let orientation = if crystallization_due(&puzzle, &locked) {
            Orientation::Crystallized { mirrored }
        } else {
            Orientation::Open { mirrored }
        };
        let reveal = reveal.updated(&puzzle, &locked);

        log::info!(
            "restored puzzle {} with {}/{} items locked",
            puzzle.id(),
            locked.len(),
            puzzle.items().len()
        );
        Ok(Self {
            puzzle,
            placements,
            locked,
            reveal,
            orientation,
        })
    }

    /// Captures the session state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            placements: self.placements.zones().clone(),
            zone_order: self.placements.orders().clone(),
            locked: self.locked.iter().cloned().collect(),
            reveal: self.reveal,
            mirrored: self.orientation.is_mirrored(),
        }
    }

    /// Returns the puzzle definition.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the current placements.
    #[must_use]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// Returns the locked item identifiers.
    #[must_use]
    pub fn locked(&self) -> &BTreeSet<ItemId> {
        &self.locked
    }

    /// Returns `true` if the item is locked.
    #[must_use]
    pub fn is_locked(&self, id: &str) -> bool {
        self.locked.contains(id)
    }

    /// Returns the revealed category flags.
    #[must_use]
    pub fn reveal(&self) -> RevealFlags {
        self.reveal
    }

    /// Returns the solving orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` if every item is locked.
    ///
    /// A complete game ignores all further mutations.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locked.len() == self.puzzle.items().len()
    }

    /// Returns `(locked, total)` item counts.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.locked.len(), self.puzzle.items().len())
    }

    /// Returns items without a placement, in puzzle order.
    pub fn unplaced_items(&self) -> impl Iterator<Item = &Item> {
        self.puzzle
            .items()
            .iter()
            .filter(|item| !self.placements.contains(item.id().as_str()))
    }

    /// Returns the category label to display on a physical zone, once revealed.
    ///
    /// Under a mirrored orientation the left zone holds the right category, so
    /// it shows the right category's label.
    #[must_use]
    pub fn revealed_label(&self, zone: Zone) -> Option<&str> {
        let category = zone.oriented(self.orientation.is_mirrored());
        if self.reveal.is_revealed(category) {
            self.puzzle.label(category)
        } else {
            None
        }
    }

    /// Places an item into a zone at the position given by `anchor`.
    ///
    /// Re-placing an already placed item moves it; it never appears twice.
    /// Ignored if the item is locked or unknown, or the game is complete.
    pub fn place_item(&mut self, id: &str, zone: Zone, anchor: &InsertAnchor) -> PlacementOutcome {
        if let Some(blocked) = self.mutation_block(id) {
            return blocked;
        }
        let id = ItemId::from(id);
        let next = self.placements.with_placed(&id, zone, anchor);
        self.commit(next, || log::debug!("placed {id} in {zone} at {anchor:?}"))
    }

    /// Returns an item to the unplaced pool.
    ///
    /// Ignored if the item is locked or unknown, or the game is complete.
    pub fn remove_item(&mut self, id: &str) -> PlacementOutcome {
        if let Some(blocked) = self.mutation_block(id) {
            return blocked;
        }
        let next = self.placements.with_removed(id);
        self.commit(next, || log::debug!("removed {id}"))
    }

    fn mutation_block(&self, id: &str) -> Option<PlacementOutcome> {
        if self.is_complete() {
            log::debug!("ignoring mutation of {id}: puzzle is complete");
            Some(PlacementOutcome::Frozen)
        } else if self.is_locked(id) {
            log::debug!("ignoring mutation of {id}: item is locked");
            Some(PlacementOutcome::Locked)
        } else if !self.puzzle.contains(id) {
            log::warn!("ignoring mutation of unknown item {id}");
            Some(PlacementOutcome::UnknownItem)
        } else {
            None
        }
    }

    fn commit(&mut self, next: Placements, log_applied: impl FnOnce()) -> PlacementOutcome {
        if next == self.placements {
            return PlacementOutcome::Unchanged;
        }
        self.placements = next;
        log_applied();
        PlacementOutcome::Applied
    }

    /// Locks an item and refreshes derived state. Returns `true` if newly locked.
    pub(crate) fn lock(&mut self, id: &ItemId) -> bool {
        let inserted = self.locked.insert(id.clone());
        if inserted {
            log::debug!("locked {id}");
        }
        inserted
    }

    /// Refreshes reveal flags and crystallizes the orientation after locking.
    pub(crate) fn settle(&mut self) {
        let reveal = self.reveal.updated(&self.puzzle, &self.locked);
        if reveal != self.reveal {
            log::info!("reveal flags now {reveal:?}");
        }
        self.reveal = reveal;
        self.orientation = self.orientation.settle(&self.puzzle, &self.locked);
        if self.is_complete() {
            log::info!("puzzle {} complete", self.puzzle.id());
        }
    }
}

/// Result of [`Game::place_item`] or [`Game::remove_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementOutcome {
    /// Placements changed.
    Applied,
    /// The request was accepted but placements are identical.
    Unchanged,
    /// The item is locked.
    Locked,
    /// The game is complete.
    Frozen,
    /// The puzzle does not define the item.
    UnknownItem,
}

/// Persistable session state.
///
/// Captures the placement mapping, zone orders, locked items, reveal flags and
/// orientation. Restoring with [`Game::from_snapshot`] replaces all of them at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Item-to-zone mapping.
    pub placements: BTreeMap<ItemId, Zone>,
    /// Ordered items per zone.
    pub zone_order: ZoneArray<Vec<ItemId>>,
    /// Locked items.
    pub locked: Vec<ItemId>,
    /// Revealed categories.
    pub reveal: RevealFlags,
    /// Whether exclusive zones are swapped.
    pub mirrored: bool,
}

/// Errors raised by [`Game::from_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// The snapshot names an item the puzzle does not define.
    #[display("snapshot names unknown item {id}")]
    UnknownItem {
        /// The unknown item.
        id: ItemId,
    },
    /// Mapping and zone orders disagree.
    #[display("inconsistent placements: {_0}")]
    Placements(PlacementsError),
    /// A locked item has no placement.
    #[display("locked item {id} is not placed")]
    LockedUnplaced {
        /// The item.
        id: ItemId,
    },
    /// A locked item is not in its expected zone.
    #[display("locked item {id} is not in its expected zone")]
    LockedMisplaced {
        /// The item.
        id: ItemId,
    },
}

impl From<PlacementsError> for SnapshotError {
    fn from(err: PlacementsError) -> Self {
        Self::Placements(err)
    }
}
