//! Puzzle state engine for Sortle.
//!
//! [`Game`] tracks a single puzzle session: which zone each item was dropped
//! in ([`Placements`]), which items are locked, which category labels are
//! revealed ([`RevealFlags`]) and whether the player is solving with the two
//! categories swapped ([`Orientation`]).
//!
//! The engine never fails at runtime. Requests that cannot apply (locked
//! items, finished puzzles) are ignored and reported through outcome values.
//! Only restoring a [`GameSnapshot`] can be rejected.

pub use self::{
    game::*,
    hint::find_hint_target,
    orientation::{Orientation, crystallization_due, detect_mirrored},
    placements::*,
    reveal::*,
    validation::*,
};

mod game;
mod hint;
mod orientation;
mod placements;
mod reveal;
#[cfg(test)]
mod testing;
mod validation;
