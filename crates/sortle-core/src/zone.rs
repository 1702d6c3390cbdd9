use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

/// One of the four regions of the puzzle's two-circle diagram.
///
/// [`Zone::Left`] and [`Zone::Right`] are the *exclusive* zones, holding items
/// that belong to exactly one category. They are the only zones affected by a
/// mirrored orientation. [`Zone::Both`] and [`Zone::Outside`] never swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Zone {
    /// Items in the left category only.
    Left,
    /// Items in the right category only.
    Right,
    /// Items in both categories (the overlap).
    Both,
    /// Items in neither category.
    Outside,
}

impl Zone {
    /// All zones in canonical order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Both, Self::Outside];

    /// The two zones that swap under a mirrored orientation.
    pub const EXCLUSIVE: [Self; 2] = [Self::Left, Self::Right];

    /// Returns `true` for [`Zone::Left`] and [`Zone::Right`].
    #[must_use]
    #[inline]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the zone seen from the opposite orientation.
    ///
    /// Swaps [`Zone::Left`] and [`Zone::Right`]; other zones map to themselves.
    #[must_use]
    #[inline]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Both | Self::Outside => self,
        }
    }

    /// Returns [`Zone::mirrored`] when `mirrored` is `true`, otherwise `self`.
    #[must_use]
    #[inline]
    pub const fn oriented(self, mirrored: bool) -> Self {
        if mirrored { self.mirrored() } else { self }
    }

    /// Returns the stable lowercase identifier used by UI adapters and serialized data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
            Self::Outside => "outside",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Both => 2,
            Self::Outside => 3,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Zone`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown zone identifier: {value:?}")]
pub struct ZoneParseError {
    /// The rejected input.
    #[error(not(source))]
    pub value: String,
}

impl FromStr for Zone {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| ZoneParseError {
                value: s.to_owned(),
            })
    }
}

/// A fixed-size container holding one value per [`Zone`].
///
/// # Examples
///
/// ```
/// use sortle_core::{Zone, ZoneArray};
///
/// let mut counts = ZoneArray::<usize>::default();
/// counts[Zone::Both] += 2;
/// assert_eq!(counts[Zone::Both], 2);
/// assert_eq!(counts[Zone::Left], 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ZoneArray<T> {
    values: [T; 4],
}

impl<T> ZoneArray<T> {
    /// Creates a container from values in [`Zone::ALL`] order.
    #[must_use]
    pub const fn from_array(values: [T; 4]) -> Self {
        Self { values }
    }

    /// Creates a container by calling `f` for every zone.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(Zone) -> T) -> Self {
        Self {
            values: Zone::ALL.map(&mut f),
        }
    }

    /// Iterates over `(zone, value)` pairs in [`Zone::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &T)> {
        Zone::ALL.into_iter().zip(&self.values)
    }

    /// Iterates mutably over `(zone, value)` pairs in [`Zone::ALL`] order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Zone, &mut T)> {
        Zone::ALL.into_iter().zip(&mut self.values)
    }

    /// Iterates over values in [`Zone::ALL`] order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<Zone> for ZoneArray<T> {
    type Output = T;

    fn index(&self, zone: Zone) -> &T {
        &self.values[zone.index()]
    }
}

impl<T> IndexMut<Zone> for ZoneArray<T> {
    fn index_mut(&mut self, zone: Zone) -> &mut T {
        &mut self.values[zone.index()]
    }
}
