use crate::ItemId;

/// Where an item is inserted within a zone's ordered item list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum InsertAnchor {
    /// Before every existing item.
    Start,
    /// Immediately after the given item.
    ///
    /// If the item is not present in the target zone, insertion falls back to
    /// [`InsertAnchor::End`].
    After(ItemId),
    /// After every existing item.
    End,
}

impl InsertAnchor {
    /// Returns the index at which to insert into `order`.
    ///
    /// A stale [`InsertAnchor::After`] (one whose item is not in `order`) yields
    /// `order.len()`.
    #[must_use]
    pub fn insertion_index(&self, order: &[ItemId]) -> usize {
        match self {
            Self::Start => 0,
            Self::After(anchor) => order
                .iter()
                .position(|id| id == anchor)
                .map_or(order.len(), |i| i + 1),
            Self::End => order.len(),
        }
    }
}
