use std::collections::BTreeSet;

use sortle_core::{ItemId, Puzzle};

use crate::Placements;

/// Whether the player is solving with the two exclusive categories swapped.
///
/// A player who does not yet know the category names may consistently put the
/// left category's items in the right zone and vice versa. That is a valid way
/// to solve, so the expected zone of every exclusive item is swapped while the
/// orientation is mirrored.
///
/// The orientation is recomputed from current placements while
/// [`Orientation::Open`], and frozen as [`Orientation::Crystallized`] the first
/// time any locked item belongs to an exclusive category. It never reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Orientation {
    /// Still derived from placements on every validation.
    Open {
        /// Current best guess.
        mirrored: bool,
    },
    /// Permanently fixed.
    Crystallized {
        /// The fixed orientation.
        mirrored: bool,
    },
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Open { mirrored: false }
    }
}

impl Orientation {
    /// Returns `true` if exclusive zones are swapped.
    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        match self {
            Self::Open { mirrored } | Self::Crystallized { mirrored } => mirrored,
        }
    }

    /// Recomputes the orientation from placements unless it is crystallized.
    #[must_use]
    pub fn resolve(self, puzzle: &Puzzle, placements: &Placements) -> Self {
        match self {
            Self::Open { .. } => Self::Open {
                mirrored: detect_mirrored(puzzle, placements),
            },
            Self::Crystallized { .. } => self,
        }
    }

    /// Crystallizes the orientation if any locked item has an exclusive canonical zone.
    #[must_use]
    pub fn settle(self, puzzle: &Puzzle, locked: &BTreeSet<ItemId>) -> Self {
        match self {
            Self::Open { mirrored } if crystallization_due(puzzle, locked) => {
                log::debug!("orientation crystallized: mirrored={mirrored}");
                Self::Crystallized { mirrored }
            }
            _ => self,
        }
    }
}

/// Returns `true` if the placements favor the mirrored hypothesis.
///
/// Only placed items with an exclusive canonical zone are counted. An item
/// placed in its canonical zone supports the standard hypothesis; one placed in
/// the opposite exclusive zone supports the mirrored hypothesis. Ties resolve to
/// the standard orientation.
#[must_use]
pub fn detect_mirrored(puzzle: &Puzzle, placements: &Placements) -> bool {
    let mut standard = 0_usize;
    let mut mirrored = 0_usize;
    for item in puzzle.items() {
        let canonical = item.canonical_zone();
        if !canonical.is_exclusive() {
            continue;
        }
        match placements.zone_of(item.id().as_str()) {
            Some(zone) if zone == canonical => standard += 1,
            Some(zone) if zone == canonical.mirrored() => mirrored += 1,
            _ => {}
        }
    }
    mirrored > standard
}

/// Returns `true` once a locked item belongs to an exclusive category.
#[must_use]
pub fn crystallization_due(puzzle: &Puzzle, locked: &BTreeSet<ItemId>) -> bool {
    puzzle
        .items()
        .iter()
        .any(|item| item.canonical_zone().is_exclusive() && locked.contains(item.id()))
}

#[cfg(test)]
mod tests {
    use sortle_core::{InsertAnchor, Zone};

    use super::*;
    use crate::testing::sample_puzzle;

    fn place(placements: &Placements, id: &str, zone: Zone) -> Placements {
        placements.with_placed(&ItemId::from(id), zone, &InsertAnchor::End)
    }

    #[test]
    fn empty_board_is_standard() {
        let puzzle = sample_puzzle();
        assert!(!detect_mirrored(&puzzle, &Placements::new()));
    }

    #[test]
    fn majority_of_swapped_exclusive_items_is_mirrored() {
        let puzzle = sample_puzzle();
        let p = place(&Placements::new(), "l1", Zone::Right);
        let p = place(&p, "r1", Zone::Left);
        assert!(detect_mirrored(&puzzle, &p));

        let p = place(&p, "l2", Zone::Left);
        assert!(detect_mirrored(&puzzle, &p));

        let p = place(&p, "r2", Zone::Right);
        assert!(!detect_mirrored(&puzzle, &p), "ties favor standard");
    }

    #[test]
    fn non_exclusive_items_do_not_vote() {
        let puzzle = sample_puzzle();
        let p = place(&Placements::new(), "b1", Zone::Left);
        let p = place(&p, "o1", Zone::Right);
        let p = place(&p, "l1", Zone::Both);
        assert!(!detect_mirrored(&puzzle, &p));
    }

    #[test]
    fn crystallized_orientation_ignores_placements() {
        let puzzle = sample_puzzle();
        let standard = place(&Placements::new(), "l1", Zone::Left);
        let orientation = Orientation::Crystallized { mirrored: true };
        assert_eq!(orientation.resolve(&puzzle, &standard), orientation);

        let open = Orientation::default().resolve(&puzzle, &standard);
        assert_eq!(open, Orientation::Open { mirrored: false });
    }

    #[test]
    fn settle_crystallizes_only_on_locked_exclusive_item() {
        let puzzle = sample_puzzle();
        let mut locked = BTreeSet::new();
        locked.insert(ItemId::from("b1"));
        let open = Orientation::Open { mirrored: true };
        assert_eq!(open.settle(&puzzle, &locked), open);

        locked.insert(ItemId::from("r1"));
        assert_eq!(
            open.settle(&puzzle, &locked),
            Orientation::Crystallized { mirrored: true }
        );
    }
}
