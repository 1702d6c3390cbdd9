//! Headless Sortle session driven by line commands on stdin.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- puzzle.json --save progress.json
//! ```
//!
//! Resume a saved game and use a recorded layout for drop positions:
//!
//! ```sh
//! cargo run -- puzzle.json --restore progress.json --layout layout.json
//! ```
//!
//! Commands: `drop <id> <zone|pool|-> [x y]`, `check`, `hint`, `show`, `quit`.

use std::{
    fs,
    io::{self, BufRead as _},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use serde::Deserialize;
use sortle_app::{
    action::Action,
    action_handler::{self, ActionEffect},
    console::{self, Command},
    dto::{self, DtoError, LayoutDto, PuzzleDto, SavedGameDto, SettingsDto},
    state::{AppState, SavedGame, Settings},
};
use sortle_core::Puzzle;
use sortle_layout::StaticLayout;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle definition (JSON).
    #[arg(value_name = "PUZZLE")]
    puzzle: PathBuf,

    /// Settled container layout used to resolve drop positions (JSON).
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Saved game to resume (JSON).
    #[arg(long, value_name = "FILE")]
    restore: Option<PathBuf>,

    /// Where to write the saved game after every change.
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Settings overrides (JSON).
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum CliError {
    #[display("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[display("{}: {source}", path.display())]
    Dto {
        path: PathBuf,
        source: DtoError,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let puzzle = load::<PuzzleDto, Puzzle>(&args.puzzle)?;
    let settings = match &args.settings {
        Some(path) => load::<SettingsDto, Settings>(path)?,
        None => Settings::default(),
    };
    let layout = match &args.layout {
        Some(path) => load::<LayoutDto, StaticLayout>(path)?,
        None => StaticLayout::new(),
    };

    let mut app_state = AppState::with_settings(puzzle, settings);

    if let Some(path) = &args.restore {
        let saved = load::<SavedGameDto, SavedGame>(path)?;
        dispatch(&mut app_state, &layout, args.save.as_deref(), Action::Restore(saved))?;
    }
    print!("{}", console::render_board(&app_state.game));

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|source| CliError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Show => print!("{}", console::render_board(&app_state.game)),
            command => {
                if let Some(action) = command.into_action() {
                    dispatch(&mut app_state, &layout, args.save.as_deref(), action)?;
                }
            }
        }
    }

    Ok(())
}

fn dispatch(
    app_state: &mut AppState,
    layout: &StaticLayout,
    save: Option<&Path>,
    action: Action,
) -> Result<(), CliError> {
    let mut effect = ActionEffect::default();
    action_handler::handle(app_state, layout, &mut effect, action);

    for feedback in effect.take_feedback() {
        println!("{}", console::describe_feedback(&app_state.game, &feedback));
    }
    if effect.completion_save_requested {
        let stats = app_state.stats;
        println!(
            "checks: {}, hints: {}, mistakes: {}",
            stats.checks, stats.hints, stats.mistakes
        );
    }
    if effect.state_save_requested
        && let Some(path) = save
    {
        let json = dto::to_json::<SavedGameDto, _>(&app_state.saved_game()).map_err(|source| {
            CliError::Dto {
                path: path.to_owned(),
                source,
            }
        })?;
        fs::write(path, json).map_err(|source| CliError::Io {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("saved game to {}", path.display());
    }
    Ok(())
}

fn load<Dto, T>(path: &Path) -> Result<T, CliError>
where
    Dto: for<'de> Deserialize<'de>,
    T: TryFrom<Dto, Error = DtoError>,
{
    let json = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    dto::from_json::<Dto, T>(&json).map_err(|source| CliError::Dto {
        path: path.to_owned(),
        source,
    })
}
