use std::collections::{BTreeMap, BTreeSet};

use sortle_core::{InsertAnchor, ItemId, Zone, ZoneArray};

/// Where every placed item currently sits.
///
/// `Placements` is an immutable value: every mutation returns a new value and
/// leaves the original untouched, so observers compare snapshots by value.
/// It maintains two views that always agree:
///
/// - a mapping from item to zone, containing only placed items
/// - an ordered item list per zone
///
/// Every placed item appears in exactly one zone order (the zone it maps to),
/// and no unplaced item appears in any zone order.
///
/// # Examples
///
/// ```
/// use sortle_core::{InsertAnchor, ItemId, Zone};
/// use sortle_game::Placements;
///
/// let a = ItemId::from("a");
/// let b = ItemId::from("b");
/// let placements = Placements::new()
///     .with_placed(&a, Zone::Left, &InsertAnchor::End)
///     .with_placed(&b, Zone::Left, &InsertAnchor::Start);
///
/// assert_eq!(placements.order(Zone::Left), [b.clone(), a.clone()]);
/// assert_eq!(placements.zone_of("a"), Some(Zone::Left));
///
/// let removed = placements.with_removed("a");
/// assert_eq!(removed.zone_of("a"), None);
/// assert_eq!(placements.zone_of("a"), Some(Zone::Left));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placements {
    zones: BTreeMap<ItemId, Zone>,
    order: ZoneArray<Vec<ItemId>>,
}

impl Placements {
    /// Creates an empty placement set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds placements from a zone mapping and per-zone orders.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementsError::DuplicateInOrder`] if an item is listed more than
    /// once across the zone orders.
    /// Returns [`PlacementsError::ZoneMismatch`] if an item is listed in a zone
    /// order other than the zone it maps to.
    /// Returns [`PlacementsError::MissingFromOrder`] if a mapped item is not listed
    /// in any zone order.
    /// Returns [`PlacementsError::NotPlaced`] if a listed item is absent from the
    /// mapping.
    pub fn from_parts(
        zones: BTreeMap<ItemId, Zone>,
        order: ZoneArray<Vec<ItemId>>,
    ) -> Result<Self, PlacementsError> {
        let mut listed = BTreeSet::new();
        for (zone, ids) in order.iter() {
            for id in ids {
                if !listed.insert(id) {
                    return Err(PlacementsError::DuplicateInOrder { id: id.clone() });
                }
                match zones.get(id) {
                    Some(&mapped) if mapped == zone => {}
                    Some(&mapped) => {
                        return Err(PlacementsError::ZoneMismatch {
                            id: id.clone(),
                            mapped,
                            listed: zone,
                        });
                    }
                    None => return Err(PlacementsError::NotPlaced { id: id.clone() }),
                }
            }
        }
        if let Some(id) = zones.keys().find(|id| !listed.contains(id)) {
            return Err(PlacementsError::MissingFromOrder { id: id.clone() });
        }
        Ok(Self { zones, order })
    }

    /// Returns the zone the item is placed in, if any.
    #[must_use]
    pub fn zone_of(&self, id: &str) -> Option<Zone> {
        self.zones.get(id).copied()
    }

    /// Returns `true` if the item is placed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.zones.contains_key(id)
    }

    /// Returns the ordered items of a zone.
    #[must_use]
    pub fn order(&self, zone: Zone) -> &[ItemId] {
        &self.order[zone]
    }

    /// Returns the ordered items of every zone.
    #[must_use]
    pub fn orders(&self) -> &ZoneArray<Vec<ItemId>> {
        &self.order
    }

    /// Returns the item-to-zone mapping.
    #[must_use]
    pub fn zones(&self) -> &BTreeMap<ItemId, Zone> {
        &self.zones
    }

    /// Iterates over placed items and their zones, ordered by item identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Zone)> {
        self.zones.iter().map(|(id, zone)| (id, *zone))
    }

    /// Returns the number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Returns a copy with `id` moved to `zone` at the position given by `anchor`.
    ///
    /// The item is first stripped from every zone order, so re-placing an item
    /// never duplicates it. An [`InsertAnchor::After`] naming an item that is not
    /// in the target zone appends at the end.
    #[must_use]
    pub fn with_placed(&self, id: &ItemId, zone: Zone, anchor: &InsertAnchor) -> Self {
        let mut next = self.clone();
        next.strip(id.as_str());
        let order = &mut next.order[zone];
        let index = anchor.insertion_index(order);
        order.insert(index, id.clone());
        next.zones.insert(id.clone(), zone);
        next
    }

    /// Returns a copy with `id` unplaced.
    #[must_use]
    pub fn with_removed(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.strip(id);
        next.zones.remove(id);
        next
    }

    fn strip(&mut self, id: &str) {
        for (_, order) in self.order.iter_mut() {
            order.retain(|listed| listed.as_str() != id);
        }
    }
}

/// Inconsistencies detected by [`Placements::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementsError {
    /// An item is listed more than once across zone orders.
    #[display("item {id} is listed more than once")]
    DuplicateInOrder {
        /// The repeated item.
        id: ItemId,
    },
    /// An item is listed in a zone other than the one it maps to.
    #[display("item {id} is mapped to {mapped} but listed in {listed}")]
    ZoneMismatch {
        /// The item.
        id: ItemId,
        /// Zone in the mapping.
        mapped: Zone,
        /// Zone whose order lists it.
        listed: Zone,
    },
    /// A mapped item is missing from every zone order.
    #[display("item {id} is placed but missing from every zone order")]
    MissingFromOrder {
        /// The item.
        id: ItemId,
    },
    /// A listed item has no mapping entry.
    #[display("item {id} is listed but not placed")]
    NotPlaced {
        /// The item.
        id: ItemId,
    },
}
