use sortle_core::Puzzle;
use sortle_game::{Game, GameSnapshot};
use sortle_layout::InsertionTolerances;

// AppState holds the session (game + settings + stats). Games are serialized for resume via SavedGame.
#[derive(Debug, Clone)]
pub struct AppState {
    pub game: Game,
    pub settings: Settings,
    pub stats: SessionStats,
}

impl AppState {
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_settings(puzzle, Settings::default())
    }

    #[must_use]
    pub fn with_settings(puzzle: Puzzle, settings: Settings) -> Self {
        Self {
            game: Game::new(puzzle),
            settings,
            stats: SessionStats::default(),
        }
    }

    /// Replaces the session with a fresh game, keeping settings.
    pub fn load_puzzle(&mut self, puzzle: Puzzle) {
        self.game = Game::new(puzzle);
        self.stats = SessionStats::default();
    }

    #[must_use]
    pub fn saved_game(&self) -> SavedGame {
        SavedGame {
            puzzle_id: self.game.puzzle().id().to_owned(),
            game: self.game.snapshot(),
            stats: self.stats,
        }
    }
}

/// Everything needed to resume a puzzle without replaying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub puzzle_id: String,
    pub game: GameSnapshot,
    pub stats: SessionStats,
}

/// Per-puzzle counters shown on the completion screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Validation requests on an unfinished puzzle.
    pub checks: u32,
    /// Hints that corrected an item.
    pub hints: u32,
    /// Items reported incorrect, summed over all checks.
    pub mistakes: u32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Settings {
    pub insertion: InsertionTolerances,
    pub hint: HintSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSettings {
    pub enabled: bool,
}

impl Default for HintSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
