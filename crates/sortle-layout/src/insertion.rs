use sortle_core::{InsertAnchor, Point};

use crate::{ItemBox, Row, cluster_rows};

/// Distance thresholds used when resolving a drop position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionTolerances {
    /// Maximum difference between vertical centers for two items to share a row.
    pub row: f32,
    /// Width of the band inside a row's outer edges that counts as "before the
    /// first item" or "after the last item".
    pub edge: f32,
}

impl InsertionTolerances {
    /// Tolerances tuned for the default card size.
    pub const DEFAULT: Self = Self {
        row: 20.0,
        edge: 30.0,
    };
}

impl Default for InsertionTolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowChoice {
    Row(usize),
    AboveAll,
    BelowAll,
}

/// Resolves where a dragged item dropped at `point` should be inserted.
///
/// `items` is the current layout of the target container, in display order,
/// or `None` if the container could not be found (which appends at the end).
/// The dragged item itself is ignored.
///
/// Items are grouped into rows ([`cluster_rows`]). The target row is the one
/// whose vertical span contains the point; a point above or below every row
/// inserts at the start or end, and a point between rows picks the row whose
/// reference center is closest. Within the row, a point in the edge band past
/// the outermost item's center inserts at the row's start or end; otherwise the
/// item under the point is split at its horizontal midpoint.
///
/// # Examples
///
/// ```
/// use sortle_core::{InsertAnchor, Point, Rect};
/// use sortle_layout::{InsertionTolerances, ItemBox, resolve_insertion};
///
/// let items = vec![
///     ItemBox::new("a", Rect::new(0.0, 0.0, 20.0, 20.0)),
///     ItemBox::new("b", Rect::new(40.0, 0.0, 60.0, 20.0)),
/// ];
/// let tolerances = InsertionTolerances::default();
///
/// let anchor = resolve_insertion(Some(items.as_slice()), Point::new(45.0, 10.0), "x", &tolerances);
/// assert_eq!(anchor, InsertAnchor::After("a".into()));
///
/// let anchor = resolve_insertion(None, Point::new(45.0, 10.0), "x", &tolerances);
/// assert_eq!(anchor, InsertAnchor::End);
/// ```
#[must_use]
pub fn resolve_insertion(
    items: Option<&[ItemBox]>,
    point: Point,
    dragged: &str,
    tolerances: &InsertionTolerances,
) -> InsertAnchor {
    let Some(items) = items else {
        log::warn!("drop container layout missing; appending {dragged}");
        return InsertAnchor::End;
    };
    let others = items.iter().filter(|item| item.id.as_str() != dragged);
    let rows = cluster_rows(others, tolerances.row);
    if rows.is_empty() {
        return InsertAnchor::Start;
    }

    let anchor = match select_row(&rows, point.y) {
        RowChoice::AboveAll => InsertAnchor::Start,
        RowChoice::BelowAll => InsertAnchor::End,
        RowChoice::Row(index) => resolve_in_row(&rows, index, point.x, tolerances.edge),
    };
    log::trace!("drop of {dragged} at {point:?} resolved to {anchor:?}");
    anchor
}

fn select_row(rows: &[Row<'_>], y: f32) -> RowChoice {
    if let Some(index) = rows.iter().position(|row| row.span().contains_y(y)) {
        return RowChoice::Row(index);
    }
    let top = rows
        .iter()
        .map(|row| row.span().top)
        .fold(f32::INFINITY, f32::min);
    let bottom = rows
        .iter()
        .map(|row| row.span().bottom)
        .fold(f32::NEG_INFINITY, f32::max);
    if y > bottom {
        return RowChoice::BelowAll;
    }
    if y < top {
        return RowChoice::AboveAll;
    }
    rows.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.reference_y() - y)
                .abs()
                .total_cmp(&(b.reference_y() - y).abs())
        })
        .map_or(RowChoice::BelowAll, |(index, _)| RowChoice::Row(index))
}

fn resolve_in_row(rows: &[Row<'_>], index: usize, x: f32, edge: f32) -> InsertAnchor {
    let row = &rows[index];
    let span = row.span();

    // Inserting at a row boundary is expressed relative to the neighboring rows.
    let row_start = || match index.checked_sub(1) {
        Some(prev) => InsertAnchor::After(rows[prev].last().id.clone()),
        None => InsertAnchor::Start,
    };
    let row_end = || {
        if index + 1 == rows.len() {
            InsertAnchor::End
        } else {
            InsertAnchor::After(row.last().id.clone())
        }
    };

    if x > span.right - edge && x > row.last().rect.center_x() {
        return row_end();
    }
    if x < span.left + edge && x < row.first().rect.center_x() {
        return row_start();
    }

    let members = row.members();
    for (i, item) in members.iter().enumerate() {
        let before = || match i.checked_sub(1) {
            Some(prev) => InsertAnchor::After(members[prev].id.clone()),
            None => row_start(),
        };
        if item.rect.contains_x(x) {
            return if x < item.rect.center_x() {
                before()
            } else {
                InsertAnchor::After(item.id.clone())
            };
        }
        if item.rect.left > x {
            return before();
        }
    }
    row_end()
}
