use std::collections::BTreeMap;

use sortle_core::{InsertAnchor, Point, Rect, Zone};

use crate::{InsertionTolerances, ItemBox, resolve_insertion};

/// Settled geometry of one zone's item container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerLayout {
    /// Bounding box of the container itself.
    pub bounds: Rect,
    /// Bounding boxes of the items it currently displays, in display order.
    pub items: Vec<ItemBox>,
}

/// Read access to the settled layout of every zone container.
///
/// The UI boundary implements this over its live layout; it must only be
/// queried after layout has settled for the current frame.
pub trait LayoutSnapshot {
    /// Returns the layout of a zone's container, or `None` if it is not displayed.
    fn container(&self, zone: Zone) -> Option<ContainerLayout>;

    /// Resolves the insertion anchor for a drop into `zone` at `point`.
    ///
    /// A missing container appends at the end.
    fn resolve_drop(
        &self,
        zone: Zone,
        point: Point,
        dragged: &str,
        tolerances: &InsertionTolerances,
    ) -> InsertAnchor {
        let container = self.container(zone);
        resolve_insertion(
            container.as_ref().map(|c| c.items.as_slice()),
            point,
            dragged,
            tolerances,
        )
    }
}

/// A layout captured ahead of time, keyed by zone.
///
/// Used by headless front ends and tests in place of a live layout query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticLayout {
    containers: BTreeMap<Zone, ContainerLayout>,
}

impl StaticLayout {
    /// Creates an empty layout in which no container is displayed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout of a zone's container.
    #[must_use]
    pub fn with_container(mut self, zone: Zone, container: ContainerLayout) -> Self {
        self.containers.insert(zone, container);
        self
    }

    /// Sets the layout of a zone's container in place.
    pub fn set_container(&mut self, zone: Zone, container: ContainerLayout) {
        self.containers.insert(zone, container);
    }
}

impl LayoutSnapshot for StaticLayout {
    fn container(&self, zone: Zone) -> Option<ContainerLayout> {
        self.containers.get(&zone).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_drop_uses_zone_container() {
        let layout = StaticLayout::new().with_container(
            Zone::Both,
            ContainerLayout {
                bounds: Rect::new(0.0, 0.0, 200.0, 100.0),
                items: vec![
                    ItemBox::new("a", Rect::new(0.0, 0.0, 20.0, 20.0)),
                    ItemBox::new("b", Rect::new(40.0, 0.0, 60.0, 20.0)),
                ],
            },
        );
        let tolerances = InsertionTolerances::default();
        let point = Point::new(45.0, 10.0);

        assert_eq!(
            layout.resolve_drop(Zone::Both, point, "x", &tolerances),
            InsertAnchor::After("a".into())
        );
        assert_eq!(
            layout.resolve_drop(Zone::Left, point, "x", &tolerances),
            InsertAnchor::End
        );
        assert!(layout.container(Zone::Outside).is_none());
    }
}
