//! Core vocabulary for the Sortle sorting puzzle.
//!
//! This crate defines the immutable inputs shared by every other layer:
//!
//! - [`Zone`] and the [`ZoneArray`] container indexed by zones
//! - [`ItemId`] and [`Item`], the ten labeled cards of a puzzle
//! - [`Puzzle`], a validated puzzle definition
//! - [`InsertAnchor`], the three-way insertion position used by placement and
//!   drop resolution
//! - [`Point`] and [`Rect`], the geometry used by the layout resolver
//!
//! # Examples
//!
//! ```
//! use sortle_core::{Item, Puzzle, Zone};
//!
//! let items = (0..Puzzle::ITEM_COUNT)
//!     .map(|i| Item::new(format!("item-{i}"), format!("Item {i}"), Zone::ALL[i % 4]))
//!     .collect();
//! let puzzle = Puzzle::new("2026-10-18", "Red things", "Round things", items).unwrap();
//!
//! assert_eq!(puzzle.items().len(), 10);
//! assert_eq!(puzzle.label(Zone::Left), Some("Red things"));
//! assert_eq!(puzzle.label(Zone::Both), None);
//! ```

pub use self::{anchor::*, geometry::*, item::*, puzzle::*, zone::*};

mod anchor;
mod geometry;
mod item;
mod puzzle;
mod zone;
