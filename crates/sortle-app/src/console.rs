//! Line-oriented command front end for the headless binary.

use std::str::FromStr;

use sortle_core::{Item, ItemId, Point, Zone};
use sortle_game::Game;

use crate::{
    action::{Action, Feedback},
    drop_router::{DragEnd, DropTarget, POOL_ID},
};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `drop <id> <zone|pool|-> [x y]`
    Drop(DragEnd),
    /// `check`
    Check,
    /// `hint`
    Hint,
    /// `show`
    Show,
    /// `quit`
    Quit,
}

impl Command {
    /// Converts into the action it dispatches, if any.
    #[must_use]
    pub fn into_action(self) -> Option<Action> {
        match self {
            Self::Drop(drag) => Some(Action::Drop(drag)),
            Self::Check => Some(Action::Check),
            Self::Hint => Some(Action::Hint),
            Self::Show | Self::Quit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command `{name}`")]
    Unknown { name: String },
    #[display("usage: {usage}")]
    Usage { usage: &'static str },
    #[display("invalid coordinate `{value}`")]
    Coordinate { value: String },
}

const DROP_USAGE: &str = "drop <id> <zone|pool|-> [x y]";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let rest: Vec<&str> = words.collect();
        let no_args = |command: Self, usage: &'static str| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::Usage { usage })
            }
        };
        match name {
            "drop" => parse_drop(&rest).map(Self::Drop),
            "check" => no_args(Self::Check, "check"),
            "hint" => no_args(Self::Hint, "hint"),
            "show" => no_args(Self::Show, "show"),
            "quit" | "exit" => no_args(Self::Quit, "quit"),
            _ => Err(CommandError::Unknown {
                name: name.to_owned(),
            }),
        }
    }
}

fn parse_drop(args: &[&str]) -> Result<DragEnd, CommandError> {
    let usage = || CommandError::Usage { usage: DROP_USAGE };
    let (item, target, coords) = match args {
        [item, target, coords @ ..] => (*item, *target, coords),
        _ => return Err(usage()),
    };
    let target = match target {
        "-" => DropTarget::None,
        POOL_ID => DropTarget::Pool,
        zone => DropTarget::Container(zone.to_owned()),
    };
    let pointer = match coords {
        [] => None,
        [x, y] => Some(Point::new(parse_coordinate(x)?, parse_coordinate(y)?)),
        _ => return Err(usage()),
    };
    Ok(DragEnd {
        item: ItemId::from(item),
        target,
        pointer,
    })
}

fn parse_coordinate(value: &str) -> Result<f32, CommandError> {
    value.parse().map_err(|_| CommandError::Coordinate {
        value: value.to_owned(),
    })
}

/// Renders the board as plain text, one line per zone plus the pool.
///
/// Locked items are marked with `*`. Exclusive zones show their category
/// label once revealed and `?` before that.
#[must_use]
pub fn render_board(game: &Game) -> String {
    let (locked, total) = game.progress();
    let mut lines = vec![format!(
        "puzzle {}: {locked}/{total} locked",
        game.puzzle().id()
    )];
    for zone in Zone::ALL {
        let mut line = format!("{:>7}", zone.as_str());
        if zone.is_exclusive() {
            let label = game.revealed_label(zone).unwrap_or("?");
            line.push_str(&format!(" [{label}]"));
        }
        line.push(':');
        for id in game.placements().order(zone) {
            let mark = if game.is_locked(id.as_str()) { "*" } else { "" };
            let text = game.puzzle().item(id.as_str()).map_or("", Item::text);
            line.push_str(&format!(" {id}{mark}({text})"));
        }
        lines.push(line);
    }
    let mut pool = format!("{POOL_ID:>7}:");
    for item in game.unplaced_items() {
        pool.push_str(&format!(" {}({})", item.id(), item.text()));
    }
    lines.push(pool);

    let mut board = lines.join("\n");
    board.push('\n');
    board
}

/// Formats one feedback signal for display.
#[must_use]
pub fn describe_feedback(game: &Game, feedback: &Feedback) -> String {
    match feedback {
        Feedback::Locked(id) => format!("{id} locked"),
        Feedback::Incorrect(id) => format!("{id} is not right yet"),
        Feedback::Hinted(id) => {
            let explanation = game
                .puzzle()
                .item(id.as_str())
                .map(Item::explanation)
                .filter(|explanation| !explanation.is_empty());
            match explanation {
                Some(explanation) => format!("hint: {id} moved ({explanation})"),
                None => format!("hint: {id} moved"),
            }
        }
        Feedback::NothingToHint => "no hint available".to_owned(),
        Feedback::HintsDisabled => "hints are disabled".to_owned(),
        Feedback::Revealed(label) => format!("category revealed: {label}"),
        Feedback::RestoreRejected => "saved game rejected".to_owned(),
        Feedback::Completed => "puzzle complete".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use sortle_core::InsertAnchor;

    use super::*;
    use crate::testing::sample_puzzle;

    #[test]
    fn parses_simple_commands() {
        assert_eq!("check".parse::<Command>(), Ok(Command::Check));
        assert_eq!("  hint ".parse::<Command>(), Ok(Command::Hint));
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parses_drop() {
        assert_eq!(
            "drop l1 left 12 3.5".parse::<Command>(),
            Ok(Command::Drop(DragEnd {
                item: "l1".into(),
                target: DropTarget::Container("left".to_owned()),
                pointer: Some(Point::new(12.0, 3.5)),
            }))
        );
        assert_eq!(
            "drop l1 pool".parse::<Command>(),
            Ok(Command::Drop(DragEnd {
                item: "l1".into(),
                target: DropTarget::Pool,
                pointer: None,
            }))
        );
        assert!(matches!(
            "drop l1 -".parse::<Command>(),
            Ok(Command::Drop(DragEnd { target: DropTarget::None, .. }))
        ));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown {
                name: "jump".to_owned()
            })
        );
        assert!(matches!(
            "drop l1".parse::<Command>(),
            Err(CommandError::Usage { .. })
        ));
        assert!(matches!(
            "drop l1 left 3".parse::<Command>(),
            Err(CommandError::Usage { .. })
        ));
        assert!(matches!(
            "check now".parse::<Command>(),
            Err(CommandError::Usage { .. })
        ));
        assert_eq!(
            "drop l1 left x 3".parse::<Command>(),
            Err(CommandError::Coordinate {
                value: "x".to_owned()
            })
        );
    }

    #[test]
    fn only_game_commands_dispatch() {
        assert!(matches!(Command::Check.into_action(), Some(Action::Check)));
        assert!(Command::Show.into_action().is_none());
        assert!(Command::Quit.into_action().is_none());
    }

    #[test]
    fn board_marks_locks_and_labels() {
        let mut game = Game::new(sample_puzzle());
        for id in ["l1", "l2", "l3"] {
            game.place_item(id, Zone::Left, &InsertAnchor::End);
        }
        game.place_item("r1", Zone::Both, &InsertAnchor::End);
        game.validate();

        let board = render_board(&game);
        let lines: Vec<_> = board.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(board.ends_with(")\n"));
        assert_eq!(lines[0], "puzzle test: 3/10 locked");
        assert_eq!(
            lines[1],
            "   left [Fruit]: l1*(Apple) l2*(Banana) l3*(Pear)"
        );
        assert_eq!(lines[2], "  right [?]:");
        assert_eq!(lines[3], "   both: r1(Fire truck)");
        assert!(lines[5].starts_with("   pool: b1(Strawberry)"));
    }

    #[test]
    fn hint_feedback_includes_explanation() {
        let game = Game::new(sample_puzzle());
        assert_eq!(
            describe_feedback(&game, &Feedback::Hinted("l5".into())),
            "hint: l5 moved (Green inside)"
        );
        assert_eq!(
            describe_feedback(&game, &Feedback::Hinted("l1".into())),
            "hint: l1 moved"
        );
    }
}
