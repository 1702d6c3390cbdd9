use sortle_core::{ItemId, Rect};

/// An item's identifier and on-screen bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBox {
    /// The item.
    pub id: ItemId,
    /// Its bounding box in layout coordinates.
    pub rect: Rect,
}

impl ItemBox {
    /// Creates an item box.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

/// A visual row of items inside a wrapping container.
///
/// Members are sorted left to right by horizontal center.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    members: Vec<&'a ItemBox>,
    reference_y: f32,
    span: Rect,
}

impl<'a> Row<'a> {
    fn new(first: &'a ItemBox) -> Self {
        Self {
            members: vec![first],
            reference_y: first.rect.center_y(),
            span: first.rect,
        }
    }

    fn push(&mut self, item: &'a ItemBox) {
        self.members.push(item);
        self.span = self.span.union(&item.rect);
    }

    /// Returns members left to right.
    #[must_use]
    pub fn members(&self) -> &[&'a ItemBox] {
        &self.members
    }

    /// Returns the vertical center of the row's first member, used for row
    /// ordering and nearest-row selection.
    #[must_use]
    pub fn reference_y(&self) -> f32 {
        self.reference_y
    }

    /// Returns the union of all member boxes.
    #[must_use]
    pub fn span(&self) -> Rect {
        self.span
    }

    /// Returns the leftmost member.
    #[must_use]
    pub fn first(&self) -> &'a ItemBox {
        self.members[0]
    }

    /// Returns the rightmost member.
    #[must_use]
    pub fn last(&self) -> &'a ItemBox {
        self.members[self.members.len() - 1]
    }
}

/// Groups boxes into rows by vertical center.
///
/// An item joins the first existing row whose reference center (the vertical
/// center of the row's first member) differs from its own by less than
/// `tolerance`; otherwise it starts a new row. Rows are returned top to
/// bottom, each sorted left to right.
#[must_use]
pub fn cluster_rows<'a>(items: impl IntoIterator<Item = &'a ItemBox>, tolerance: f32) -> Vec<Row<'a>> {
    let mut rows: Vec<Row<'a>> = vec![];
    for item in items {
        let center_y = item.rect.center_y();
        match rows
            .iter_mut()
            .find(|row| (row.reference_y - center_y).abs() < tolerance)
        {
            Some(row) => row.push(item),
            None => rows.push(Row::new(item)),
        }
    }
    rows.sort_by(|a, b| a.reference_y.total_cmp(&b.reference_y));
    for row in &mut rows {
        row.members
            .sort_by(|a, b| a.rect.center_x().total_cmp(&b.rect.center_x()));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, x: f32, y: f32) -> ItemBox {
        ItemBox::new(id, Rect::from_origin_size(x, y, 20.0, 20.0))
    }

    fn ids<'a>(row: &Row<'a>) -> Vec<&'a str> {
        row.members().iter().map(|&item| item.id.as_str()).collect()
    }

    #[test]
    fn groups_by_vertical_center_and_sorts() {
        let items = vec![
            card("d", 40.0, 52.0),
            card("b", 40.0, 0.0),
            card("a", 0.0, 5.0),
            card("c", 0.0, 50.0),
        ];
        let rows = cluster_rows(&items, 20.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(ids(&rows[0]), ["a", "b"]);
        assert_eq!(ids(&rows[1]), ["c", "d"]);
        assert_eq!(rows[0].span(), Rect::new(0.0, 0.0, 60.0, 25.0));
        assert_eq!(rows[1].reference_y(), 62.0);
        assert_eq!(rows[1].first().id.as_str(), "c");
        assert_eq!(rows[1].last().id.as_str(), "d");
    }

    #[test]
    fn tolerance_is_strict() {
        let items = vec![card("a", 0.0, 0.0), card("b", 30.0, 20.0)];
        assert_eq!(cluster_rows(&items, 20.0).len(), 2);
        assert_eq!(cluster_rows(&items, 20.5).len(), 1);
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(cluster_rows(&Vec::<ItemBox>::new(), 20.0).is_empty());
    }
}
