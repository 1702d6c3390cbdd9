use sortle_core::{InsertAnchor, ItemId, Point, Zone};
use sortle_game::{Game, PlacementOutcome};
use sortle_layout::{InsertionTolerances, LayoutSnapshot};

/// Identifier the UI uses for the unplaced item pool.
pub const POOL_ID: &str = "pool";

/// Where a drag gesture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped outside any target.
    None,
    /// Dropped back on the unplaced pool.
    Pool,
    /// Dropped on a container with this raw identifier. Not necessarily a valid zone.
    Container(String),
}

impl DropTarget {
    /// Classifies a raw drop-target identifier reported by the UI.
    #[must_use]
    pub fn from_id(id: Option<&str>) -> Self {
        match id {
            None => Self::None,
            Some(POOL_ID) => Self::Pool,
            Some(id) => Self::Container(id.to_owned()),
        }
    }
}

/// A completed drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub item: ItemId,
    pub target: DropTarget,
    /// Last pointer position tracked during the gesture, if any.
    pub pointer: Option<Point>,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropOutcome {
    Removed(PlacementOutcome),
    Placed {
        zone: Zone,
        anchor: InsertAnchor,
        outcome: PlacementOutcome,
    },
}

impl DropOutcome {
    #[must_use]
    pub fn placement_outcome(&self) -> PlacementOutcome {
        match self {
            Self::Removed(outcome) | Self::Placed { outcome, .. } => *outcome,
        }
    }
}

/// Applies a finished drag gesture to the game.
///
/// Drops with no target, on the pool, or on an unrecognized container remove
/// the item. Drops on a zone resolve an insertion anchor from the pointer
/// position (or the container's center when the pointer was not tracked) and
/// place the item there.
pub fn route_drop(
    game: &mut Game,
    layout: &impl LayoutSnapshot,
    drag: &DragEnd,
    tolerances: &InsertionTolerances,
) -> DropOutcome {
    let id = drag.item.as_str();
    let zone = match &drag.target {
        DropTarget::None | DropTarget::Pool => {
            return DropOutcome::Removed(game.remove_item(id));
        }
        DropTarget::Container(raw) => match raw.parse::<Zone>() {
            Ok(zone) => zone,
            Err(err) => {
                log::warn!("{err}; returning {id} to the pool");
                return DropOutcome::Removed(game.remove_item(id));
            }
        },
    };

    let point = drag
        .pointer
        .or_else(|| layout.container(zone).map(|c| c.bounds.center()));
    let anchor = match point {
        Some(point) => layout.resolve_drop(zone, point, id, tolerances),
        None => {
            log::warn!("no pointer or layout for {zone}; appending {id}");
            InsertAnchor::End
        }
    };
    let outcome = game.place_item(id, zone, &anchor);
    DropOutcome::Placed {
        zone,
        anchor,
        outcome,
    }
}
