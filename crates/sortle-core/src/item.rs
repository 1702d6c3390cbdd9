use std::borrow::Borrow;

use crate::Zone;

/// Stable identifier of a puzzle item.
///
/// # Examples
///
/// ```
/// use sortle_core::ItemId;
///
/// let id = ItemId::from("apple");
/// assert_eq!(id.as_str(), "apple");
/// assert_eq!(id.to_string(), "apple");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
#[display("{_0}")]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A labeled card the player sorts into a [`Zone`].
///
/// Items are immutable for the lifetime of a puzzle session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    text: String,
    canonical_zone: Zone,
    explanation: String,
}

impl Item {
    /// Creates an item with an empty explanation.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>, canonical_zone: Zone) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            canonical_zone,
            explanation: String::new(),
        }
    }

    /// Sets the explanation shown after the item is locked.
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Returns the item identifier.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the ground-truth zone as authored.
    #[must_use]
    pub fn canonical_zone(&self) -> Zone {
        self.canonical_zone
    }

    /// Returns the explanation text.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Returns the zone this item must occupy under the given orientation.
    #[must_use]
    #[inline]
    pub fn expected_zone(&self, mirrored: bool) -> Zone {
        self.canonical_zone.oriented(mirrored)
    }
}
