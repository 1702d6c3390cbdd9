use sortle_core::{ItemId, Puzzle};

use crate::{drop_router::DragEnd, state::SavedGame};

#[derive(Debug)]
pub enum Action {
    /// A drag gesture ended.
    Drop(DragEnd),
    /// Validate current placements.
    Check,
    /// Auto-correct one placed item.
    Hint,
    /// Start a new puzzle, discarding the current session.
    LoadPuzzle(Puzzle),
    /// Resume the current puzzle from a saved game.
    Restore(SavedGame),
}

impl From<DragEnd> for Action {
    fn from(drag: DragEnd) -> Self {
        Action::Drop(drag)
    }
}

impl From<Puzzle> for Action {
    fn from(puzzle: Puzzle) -> Self {
        Action::LoadPuzzle(puzzle)
    }
}

impl From<SavedGame> for Action {
    fn from(saved: SavedGame) -> Self {
        Action::Restore(saved)
    }
}

/// Signals for the presentation layer produced while handling an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Feedback {
    /// The item was just locked by a check.
    Locked(ItemId),
    /// The item failed a check.
    Incorrect(ItemId),
    /// A hint moved and locked the item.
    Hinted(ItemId),
    /// A hint was requested but no item was eligible.
    NothingToHint,
    /// Hints are turned off in settings.
    HintsDisabled,
    /// A category label was revealed; carries the canonical category label.
    Revealed(String),
    /// A saved game was rejected and the current session kept.
    RestoreRejected,
    /// Every item is locked.
    Completed,
}
