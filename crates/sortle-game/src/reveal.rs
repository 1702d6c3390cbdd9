use std::collections::BTreeSet;

use sortle_core::{ItemId, Puzzle, Zone};

/// Number of locked items of a category needed to reveal that category's label.
pub const REVEAL_THRESHOLD: usize = 3;

/// Which category labels have been revealed to the player.
///
/// Flags are keyed by *canonical* category, not by physical zone, so mirrored
/// play reveals labels at the same pace as standard play. Once set, a flag is
/// never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlags {
    /// The left category's label is revealed.
    pub left: bool,
    /// The right category's label is revealed.
    pub right: bool,
}

impl RevealFlags {
    /// Both labels revealed.
    pub const ALL: Self = Self {
        left: true,
        right: true,
    };

    /// Returns whether the label of a canonical category is revealed.
    ///
    /// Always `false` for [`Zone::Both`] and [`Zone::Outside`], which have no label.
    #[must_use]
    pub const fn is_revealed(self, category: Zone) -> bool {
        match category {
            Zone::Left => self.left,
            Zone::Right => self.right,
            Zone::Both | Zone::Outside => false,
        }
    }

    /// Returns the flags after accounting for the current locked set.
    ///
    /// A category is revealed once [`REVEAL_THRESHOLD`] locked items have it as
    /// their canonical zone. Every label is revealed once every item is locked.
    #[must_use]
    pub fn updated(self, puzzle: &Puzzle, locked: &BTreeSet<ItemId>) -> Self {
        if puzzle.items().iter().all(|item| locked.contains(item.id())) {
            return Self::ALL;
        }
        let locked_in = |category: Zone| {
            puzzle
                .items()
                .iter()
                .filter(|item| item.canonical_zone() == category && locked.contains(item.id()))
                .count()
        };
        Self {
            left: self.left || locked_in(Zone::Left) >= REVEAL_THRESHOLD,
            right: self.right || locked_in(Zone::Right) >= REVEAL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_puzzle;

    fn locked(ids: &[&str]) -> BTreeSet<ItemId> {
        ids.iter().copied().map(ItemId::from).collect()
    }

    #[test]
    fn threshold_counts_canonical_category() {
        let puzzle = sample_puzzle();
        let flags = RevealFlags::default().updated(&puzzle, &locked(&["l1", "l2"]));
        assert_eq!(flags, RevealFlags::default());

        let flags = flags.updated(&puzzle, &locked(&["l1", "l2", "l3"]));
        assert!(flags.left);
        assert!(!flags.right);
        assert!(flags.is_revealed(Zone::Left));
        assert!(!flags.is_revealed(Zone::Both));
    }

    #[test]
    fn flags_never_unset() {
        let puzzle = sample_puzzle();
        let flags = RevealFlags {
            left: true,
            right: false,
        };
        assert!(flags.updated(&puzzle, &locked(&[])).left);
        let five = locked(&["l1", "l2", "l3", "l4", "l5"]);
        assert!(flags.updated(&puzzle, &five).left);
    }

    #[test]
    fn all_locked_reveals_everything() {
        let puzzle = sample_puzzle();
        let all: BTreeSet<ItemId> = puzzle.items().iter().map(|i| i.id().clone()).collect();
        // Only two right items exist, below the threshold on their own.
        assert_eq!(
            RevealFlags::default().updated(&puzzle, &all),
            RevealFlags::ALL
        );
    }
}
