use std::collections::HashSet;

use crate::{Item, ItemId, Zone};

/// A validated puzzle definition.
///
/// A puzzle holds exactly [`Puzzle::ITEM_COUNT`] items with unique, non-empty
/// identifiers, plus the labels of the two exclusive categories. Item order is
/// the authored order and is used wherever a stable iteration order is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    id: String,
    left_label: String,
    right_label: String,
    items: Vec<Item>,
}

impl Puzzle {
    /// Number of items in every puzzle.
    pub const ITEM_COUNT: usize = 10;

    /// Creates a puzzle after validating its items and labels.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ItemCount`] if there are not exactly
    /// [`Puzzle::ITEM_COUNT`] items.
    /// Returns [`PuzzleError::EmptyLabel`] if a category label is blank.
    /// Returns [`PuzzleError::EmptyItemId`] or [`PuzzleError::DuplicateItemId`]
    /// if item identifiers are not usable as keys.
    pub fn new(
        id: impl Into<String>,
        left_label: impl Into<String>,
        right_label: impl Into<String>,
        items: Vec<Item>,
    ) -> Result<Self, PuzzleError> {
        let left_label = left_label.into();
        let right_label = right_label.into();

        if items.len() != Self::ITEM_COUNT {
            return Err(PuzzleError::ItemCount { count: items.len() });
        }
        for (zone, label) in [(Zone::Left, &left_label), (Zone::Right, &right_label)] {
            if label.trim().is_empty() {
                return Err(PuzzleError::EmptyLabel { zone });
            }
        }
        let mut seen = HashSet::new();
        for item in &items {
            if item.id().as_str().is_empty() {
                return Err(PuzzleError::EmptyItemId);
            }
            if !seen.insert(item.id()) {
                return Err(PuzzleError::DuplicateItemId {
                    id: item.id().clone(),
                });
            }
        }

        Ok(Self {
            id: id.into(),
            left_label,
            right_label,
            items,
        })
    }

    /// Returns the puzzle identifier (typically the publication date).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the items in authored order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item with the given identifier.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id().as_str() == id)
    }

    /// Returns `true` if the puzzle defines an item with the given identifier.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    /// Returns the category label of an exclusive zone.
    ///
    /// Returns `None` for [`Zone::Both`] and [`Zone::Outside`].
    #[must_use]
    pub fn label(&self, zone: Zone) -> Option<&str> {
        match zone {
            Zone::Left => Some(&self.left_label),
            Zone::Right => Some(&self.right_label),
            Zone::Both | Zone::Outside => None,
        }
    }
}

/// Errors raised while building a [`Puzzle`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The puzzle does not have exactly [`Puzzle::ITEM_COUNT`] items.
    #[display("puzzle must have {} items, found {count}", Puzzle::ITEM_COUNT)]
    ItemCount {
        /// Number of items supplied.
        count: usize,
    },
    /// A category label is empty.
    #[display("category label for {zone} is empty")]
    EmptyLabel {
        /// The zone whose label is empty.
        zone: Zone,
    },
    /// An item has an empty identifier.
    #[display("item identifier is empty")]
    EmptyItemId,
    /// Two items share an identifier.
    #[display("duplicate item identifier: {id}")]
    DuplicateItemId {
        /// The repeated identifier.
        id: ItemId,
    },
}
