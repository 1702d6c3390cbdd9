//! Drop-position resolution for Sortle's wrapping zone containers.
//!
//! A zone displays its items as cards that wrap onto several rows. When a
//! drag ends, [`resolve_insertion`] turns the raw pointer coordinate into an
//! [`InsertAnchor`](sortle_core::InsertAnchor) by grouping the container's
//! cards into visual rows ([`cluster_rows`]) and locating the pointer among
//! them.
//!
//! Geometry is injected as plain [`ItemBox`] lists, so resolution is a pure
//! function. Live layout queries belong to a [`LayoutSnapshot`] implementation
//! at the UI boundary; [`StaticLayout`] is a captured one.

pub use self::{insertion::*, rows::*, snapshot::*};

mod insertion;
mod rows;
mod snapshot;
