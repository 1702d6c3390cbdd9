use sortle_core::Zone;
use sortle_game::{Game, RevealFlags};
use sortle_layout::LayoutSnapshot;

use crate::{
    action::{Action, Feedback},
    drop_router::{self, DragEnd, DropOutcome},
    state::{AppState, SavedGame},
};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ActionEffect {
    /// Session state changed and should be persisted.
    pub state_save_requested: bool,
    /// The puzzle became complete during this batch of actions.
    pub completion_save_requested: bool,
    pub feedback: Vec<Feedback>,
}

impl ActionEffect {
    pub fn take_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }
}

struct ActionContext<'a, L> {
    app_state: &'a mut AppState,
    layout: &'a L,
    effect: &'a mut ActionEffect,
}

pub fn handle_all<L>(
    app_state: &mut AppState,
    layout: &L,
    effect: &mut ActionEffect,
    actions: impl IntoIterator<Item = Action>,
) where
    L: LayoutSnapshot,
{
    for action in actions {
        handle(app_state, layout, effect, action);
    }
}

pub fn handle<L>(app_state: &mut AppState, layout: &L, effect: &mut ActionEffect, action: Action)
where
    L: LayoutSnapshot,
{
    let mut ctx = ActionContext {
        app_state,
        layout,
        effect,
    };

    let game_before = ctx.app_state.game.clone();
    let stats_before = ctx.app_state.stats;

    match action {
        Action::Drop(drag) => ctx.drop_item(&drag),
        Action::Check => ctx.check(),
        Action::Hint => ctx.hint(),
        Action::LoadPuzzle(puzzle) => {
            log::info!("loading puzzle {}", puzzle.id());
            ctx.app_state.load_puzzle(puzzle);
        }
        Action::Restore(saved) => ctx.restore(saved),
    }

    if ctx.app_state.game != game_before || ctx.app_state.stats != stats_before {
        ctx.effect.state_save_requested = true;
    }
}

impl<L> ActionContext<'_, L>
where
    L: LayoutSnapshot,
{
    fn drop_item(&mut self, drag: &DragEnd) {
        let outcome = drop_router::route_drop(
            &mut self.app_state.game,
            self.layout,
            drag,
            &self.app_state.settings.insertion,
        );
        match &outcome {
            DropOutcome::Placed { zone, outcome, .. } => {
                log::debug!("drop {} on {zone}: {outcome:?}", drag.item);
            }
            DropOutcome::Removed(outcome) => {
                log::debug!("drop {} on pool: {outcome:?}", drag.item);
            }
        }
    }

    fn check(&mut self) {
        let reveal_before = self.app_state.game.reveal();
        let outcome = self.app_state.game.validate();
        if outcome.complete && outcome.newly_locked.is_empty() {
            return;
        }

        let stats = &mut self.app_state.stats;
        stats.checks += 1;
        stats.mistakes += u32::try_from(outcome.incorrect.len()).unwrap_or(u32::MAX);

        self.effect
            .feedback
            .extend(outcome.newly_locked.into_iter().map(Feedback::Locked));
        self.effect
            .feedback
            .extend(outcome.incorrect.into_iter().map(Feedback::Incorrect));
        self.push_reveal_feedback(reveal_before);
        if outcome.complete {
            self.complete();
        }
    }

    fn hint(&mut self) {
        if !self.app_state.settings.hint.enabled {
            self.effect.feedback.push(Feedback::HintsDisabled);
            return;
        }
        let reveal_before = self.app_state.game.reveal();
        match self.app_state.game.reveal_hint() {
            Some(id) => {
                self.app_state.stats.hints += 1;
                self.effect.feedback.push(Feedback::Hinted(id));
                self.push_reveal_feedback(reveal_before);
                if self.app_state.game.is_complete() {
                    self.complete();
                }
            }
            None => self.effect.feedback.push(Feedback::NothingToHint),
        }
    }

    fn complete(&mut self) {
        let stats = self.app_state.stats;
        log::info!(
            "completed with {} checks, {} hints, {} mistakes",
            stats.checks,
            stats.hints,
            stats.mistakes
        );
        self.effect.completion_save_requested = true;
        self.effect.feedback.push(Feedback::Completed);
    }

    fn restore(&mut self, saved: SavedGame) {
        let puzzle = self.app_state.game.puzzle();
        if saved.puzzle_id != puzzle.id() {
            log::warn!(
                "saved game is for puzzle {}, not {}; ignoring",
                saved.puzzle_id,
                puzzle.id()
            );
            self.effect.feedback.push(Feedback::RestoreRejected);
            return;
        }
        match Game::from_snapshot(puzzle.clone(), saved.game) {
            Ok(game) => {
                log::info!("restored saved game for puzzle {}", saved.puzzle_id);
                self.app_state.game = game;
                self.app_state.stats = saved.stats;
            }
            Err(err) => {
                log::warn!("rejecting saved game: {err}");
                self.effect.feedback.push(Feedback::RestoreRejected);
            }
        }
    }

    fn push_reveal_feedback(&mut self, before: RevealFlags) {
        let game = &self.app_state.game;
        let after = game.reveal();
        for category in Zone::EXCLUSIVE {
            if after.is_revealed(category)
                && !before.is_revealed(category)
                && let Some(label) = game.puzzle().label(category)
            {
                self.effect.feedback.push(Feedback::Revealed(label.to_owned()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sortle_core::{ItemId, Zone};
    use sortle_game::GameSnapshot;
    use sortle_layout::StaticLayout;

    use super::*;
    use crate::{
        drop_router::DropTarget,
        state::{HintSettings, SessionStats},
        testing::sample_puzzle,
    };

    fn run(app_state: &mut AppState, action: impl Into<Action>) -> ActionEffect {
        let mut effect = ActionEffect::default();
        handle(app_state, &StaticLayout::new(), &mut effect, action.into());
        effect
    }

    fn drop_on(item: &str, zone: Zone) -> DragEnd {
        DragEnd {
            item: item.into(),
            target: DropTarget::Container(zone.as_str().to_owned()),
            pointer: None,
        }
    }

    fn place_all_correctly(app_state: &mut AppState) {
        let items: Vec<_> = app_state
            .game
            .puzzle()
            .items()
            .iter()
            .map(|item| (item.id().as_str().to_owned(), item.canonical_zone()))
            .collect();
        for (id, zone) in items {
            run(app_state, drop_on(&id, zone));
        }
    }

    #[test]
    fn drop_places_and_requests_save() {
        let mut app_state = AppState::new(sample_puzzle());
        let effect = run(&mut app_state, drop_on("l1", Zone::Left));
        assert!(effect.state_save_requested);
        assert_eq!(app_state.game.placements().zone_of("l1"), Some(Zone::Left));
        assert!(effect.feedback.is_empty());
    }

    #[test]
    fn unchanged_drop_does_not_request_save() {
        let mut app_state = AppState::new(sample_puzzle());
        run(&mut app_state, drop_on("l1", Zone::Left));
        let effect = run(&mut app_state, drop_on("l1", Zone::Left));
        assert!(!effect.state_save_requested);
    }

    #[test]
    fn check_updates_stats_and_feedback() {
        let mut app_state = AppState::new(sample_puzzle());
        run(&mut app_state, drop_on("l1", Zone::Left));
        run(&mut app_state, drop_on("l2", Zone::Left));
        run(&mut app_state, drop_on("r1", Zone::Left));

        let effect = run(&mut app_state, Action::Check);
        assert_eq!(
            app_state.stats,
            SessionStats {
                checks: 1,
                hints: 0,
                mistakes: 1,
            }
        );
        assert_eq!(
            effect.feedback,
            [
                Feedback::Locked("l1".into()),
                Feedback::Locked("l2".into()),
                Feedback::Incorrect("r1".into()),
            ]
        );
        assert!(effect.state_save_requested);
    }

    #[test]
    fn check_reports_revealed_label() {
        let mut app_state = AppState::new(sample_puzzle());
        for id in ["l1", "l2", "l3"] {
            run(&mut app_state, drop_on(id, Zone::Left));
        }
        let effect = run(&mut app_state, Action::Check);
        assert!(effect.feedback.contains(&Feedback::Revealed("Fruit".to_owned())));

        // Already revealed labels are not reported again.
        run(&mut app_state, drop_on("l4", Zone::Left));
        let effect = run(&mut app_state, Action::Check);
        assert!(!effect.feedback.iter().any(Feedback::is_revealed));
    }

    #[test]
    fn hint_counts_and_reports() {
        let mut app_state = AppState::new(sample_puzzle());
        run(&mut app_state, drop_on("r1", Zone::Both));
        let effect = run(&mut app_state, Action::Hint);
        assert_eq!(effect.feedback, [Feedback::Hinted("r1".into())]);
        assert_eq!(app_state.stats.hints, 1);
        assert!(app_state.game.is_locked("r1"));
    }

    #[test]
    fn hint_without_target_reports_nothing() {
        let mut app_state = AppState::new(sample_puzzle());
        let effect = run(&mut app_state, Action::Hint);
        assert_eq!(effect.feedback, [Feedback::NothingToHint]);
        assert_eq!(app_state.stats.hints, 0);
        assert!(!effect.state_save_requested);
    }

    #[test]
    fn disabled_hints_are_refused() {
        let mut app_state = AppState::new(sample_puzzle());
        app_state.settings.hint = HintSettings { enabled: false };
        run(&mut app_state, drop_on("r1", Zone::Both));
        let effect = run(&mut app_state, Action::Hint);
        assert_eq!(effect.feedback, [Feedback::HintsDisabled]);
        assert!(!app_state.game.is_locked("r1"));
    }

    #[test]
    fn completion_requests_completion_save_once() {
        let mut app_state = AppState::new(sample_puzzle());
        place_all_correctly(&mut app_state);

        let effect = run(&mut app_state, Action::Check);
        assert!(effect.completion_save_requested);
        assert_eq!(effect.feedback.last(), Some(&Feedback::Completed));
        assert_eq!(app_state.stats.checks, 1);

        let effect = run(&mut app_state, Action::Check);
        assert!(!effect.completion_save_requested);
        assert!(effect.feedback.is_empty());
        assert_eq!(app_state.stats.checks, 1);
    }

    #[test]
    fn load_puzzle_resets_session() {
        let mut app_state = AppState::new(sample_puzzle());
        run(&mut app_state, drop_on("l1", Zone::Left));
        run(&mut app_state, Action::Check);

        let effect = run(&mut app_state, sample_puzzle());
        assert!(app_state.game.placements().is_empty());
        assert_eq!(app_state.stats, SessionStats::default());
        assert!(effect.state_save_requested);
    }

    #[test]
    fn restore_replaces_session() {
        let mut source = AppState::new(sample_puzzle());
        run(&mut source, drop_on("l1", Zone::Left));
        run(&mut source, Action::Check);
        let saved = source.saved_game();

        let mut app_state = AppState::new(sample_puzzle());
        let effect = run(&mut app_state, saved);
        assert!(effect.feedback.is_empty());
        assert!(app_state.game.is_locked("l1"));
        assert_eq!(app_state.stats.checks, 1);
    }

    #[test]
    fn restore_rejects_other_puzzle() {
        let mut app_state = AppState::new(sample_puzzle());
        let saved = SavedGame {
            puzzle_id: "other".to_owned(),
            game: GameSnapshot::default(),
            stats: SessionStats::default(),
        };
        let effect = run(&mut app_state, saved);
        assert_eq!(effect.feedback, [Feedback::RestoreRejected]);
    }

    #[test]
    fn restore_rejects_inconsistent_snapshot() {
        let mut app_state = AppState::new(sample_puzzle());
        run(&mut app_state, drop_on("l1", Zone::Left));
        let saved = SavedGame {
            puzzle_id: "test".to_owned(),
            game: GameSnapshot {
                locked: vec![ItemId::from("l2")],
                ..GameSnapshot::default()
            },
            stats: SessionStats::default(),
        };
        let effect = run(&mut app_state, saved);
        assert_eq!(effect.feedback, [Feedback::RestoreRejected]);
        assert_eq!(app_state.game.placements().zone_of("l1"), Some(Zone::Left));
    }

    #[test]
    fn handle_all_applies_in_order() {
        let mut app_state = AppState::new(sample_puzzle());
        let mut effect = ActionEffect::default();
        handle_all(
            &mut app_state,
            &StaticLayout::new(),
            &mut effect,
            [
                Action::from(drop_on("l1", Zone::Left)),
                Action::Check,
                Action::from(drop_on("l1", Zone::Right)),
            ],
        );
        assert!(app_state.game.is_locked("l1"));
        assert_eq!(app_state.game.placements().zone_of("l1"), Some(Zone::Left));
        assert_eq!(effect.take_feedback(), [Feedback::Locked("l1".into())]);
        assert!(effect.feedback.is_empty());
    }
}
