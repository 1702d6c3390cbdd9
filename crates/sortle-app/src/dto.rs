//! Serde DTOs for the JSON files the app reads and writes.
//!
//! Core types stay serde-free; conversions happen here. Zones are encoded as
//! their lowercase identifiers and all records are plain key/value maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sortle_core::{Item, ItemId, Puzzle, PuzzleError, Rect, Zone, ZoneArray, ZoneParseError};
use sortle_game::{GameSnapshot, RevealFlags};
use sortle_layout::{ContainerLayout, InsertionTolerances, ItemBox, StaticLayout};

use crate::state::{HintSettings, SavedGame, SessionStats, Settings};

/// Errors that can occur when converting DTOs into domain values.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DtoError {
    #[display("invalid JSON: {_0}")]
    Json(serde_json::Error),
    #[display("{_0}")]
    Zone(ZoneParseError),
    #[display("invalid puzzle: {_0}")]
    Puzzle(PuzzleError),
    #[display("{name} must be a finite non-negative number, got {value}")]
    #[from(ignore)]
    Tolerance { name: &'static str, value: f32 },
}

/// Parses a JSON document into a DTO and converts it.
pub fn from_json<Dto, T>(json: &str) -> Result<T, DtoError>
where
    Dto: for<'de> Deserialize<'de>,
    T: TryFrom<Dto, Error = DtoError>,
{
    let dto: Dto = serde_json::from_str(json)?;
    T::try_from(dto)
}

/// Serializes a value through its DTO as pretty JSON.
pub fn to_json<'a, Dto, T>(value: &'a T) -> Result<String, DtoError>
where
    Dto: Serialize + From<&'a T>,
{
    Ok(serde_json::to_string_pretty(&Dto::from(value))?)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDto {
    pub id: String,
    pub left_label: String,
    pub right_label: String,
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: String,
    pub text: String,
    pub zone: String,
    #[serde(default)]
    pub explanation: String,
}

impl From<&Puzzle> for PuzzleDto {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            id: puzzle.id().to_owned(),
            left_label: puzzle.label(Zone::Left).unwrap_or_default().to_owned(),
            right_label: puzzle.label(Zone::Right).unwrap_or_default().to_owned(),
            items: puzzle
                .items()
                .iter()
                .map(|item| ItemDto {
                    id: item.id().to_string(),
                    text: item.text().to_owned(),
                    zone: item.canonical_zone().to_string(),
                    explanation: item.explanation().to_owned(),
                })
                .collect(),
        }
    }
}

impl TryFrom<PuzzleDto> for Puzzle {
    type Error = DtoError;

    fn try_from(dto: PuzzleDto) -> Result<Self, Self::Error> {
        let items = dto
            .items
            .into_iter()
            .map(|item| -> Result<Item, DtoError> {
                let zone = item.zone.parse()?;
                Ok(Item::new(item.id, item.text, zone).with_explanation(item.explanation))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Puzzle::new(dto.id, dto.left_label, dto.right_label, items)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGameDto {
    pub puzzle_id: String,
    pub placements: BTreeMap<String, String>,
    pub zone_order: BTreeMap<String, Vec<String>>,
    pub locked: Vec<String>,
    pub reveal: RevealDto,
    pub mirrored: bool,
    #[serde(default)]
    pub stats: StatsDto,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RevealDto {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatsDto {
    pub checks: u32,
    pub hints: u32,
    pub mistakes: u32,
}

impl From<&SavedGame> for SavedGameDto {
    fn from(saved: &SavedGame) -> Self {
        let GameSnapshot {
            placements,
            zone_order,
            locked,
            reveal,
            mirrored,
        } = &saved.game;
        Self {
            puzzle_id: saved.puzzle_id.clone(),
            placements: placements
                .iter()
                .map(|(id, zone)| (id.to_string(), zone.to_string()))
                .collect(),
            zone_order: zone_order
                .iter()
                .map(|(zone, ids)| {
                    (
                        zone.to_string(),
                        ids.iter().map(ToString::to_string).collect(),
                    )
                })
                .collect(),
            locked: locked.iter().map(ToString::to_string).collect(),
            reveal: RevealDto {
                left: reveal.left,
                right: reveal.right,
            },
            mirrored: *mirrored,
            stats: StatsDto {
                checks: saved.stats.checks,
                hints: saved.stats.hints,
                mistakes: saved.stats.mistakes,
            },
        }
    }
}

impl TryFrom<SavedGameDto> for SavedGame {
    type Error = DtoError;

    fn try_from(dto: SavedGameDto) -> Result<Self, Self::Error> {
        let placements = dto
            .placements
            .into_iter()
            .map(|(id, zone)| -> Result<(ItemId, Zone), DtoError> {
                Ok((ItemId::from(id), zone.parse()?))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        let mut zone_order = ZoneArray::<Vec<ItemId>>::default();
        for (zone, ids) in dto.zone_order {
            let zone: Zone = zone.parse()?;
            zone_order[zone] = ids.into_iter().map(ItemId::from).collect();
        }
        Ok(SavedGame {
            puzzle_id: dto.puzzle_id,
            game: GameSnapshot {
                placements,
                zone_order,
                locked: dto.locked.into_iter().map(ItemId::from).collect(),
                reveal: RevealFlags {
                    left: dto.reveal.left,
                    right: dto.reveal.right,
                },
                mirrored: dto.mirrored,
            },
            stats: SessionStats {
                checks: dto.stats.checks,
                hints: dto.stats.hints,
                mistakes: dto.stats.mistakes,
            },
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RectDto {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl From<RectDto> for Rect {
    fn from(dto: RectDto) -> Self {
        Rect::new(dto.left, dto.top, dto.right, dto.bottom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemBoxDto {
    pub id: String,
    pub rect: RectDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDto {
    pub bounds: RectDto,
    #[serde(default)]
    pub items: Vec<ItemBoxDto>,
}

/// Captured layout of zone containers, keyed by zone identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutDto {
    pub containers: BTreeMap<String, ContainerDto>,
}

impl TryFrom<LayoutDto> for StaticLayout {
    type Error = DtoError;

    fn try_from(dto: LayoutDto) -> Result<Self, Self::Error> {
        let mut layout = StaticLayout::new();
        for (zone, container) in dto.containers {
            layout.set_container(
                zone.parse()?,
                ContainerLayout {
                    bounds: container.bounds.into(),
                    items: container
                        .items
                        .into_iter()
                        .map(|item| ItemBox::new(item.id, item.rect.into()))
                        .collect(),
                },
            );
        }
        Ok(layout)
    }
}

/// User-tunable settings; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDto {
    pub row_tolerance: f32,
    pub edge_tolerance: f32,
    pub hints_enabled: bool,
}

impl Default for SettingsDto {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SettingsDto {
    fn from(settings: &Settings) -> Self {
        Self {
            row_tolerance: settings.insertion.row,
            edge_tolerance: settings.insertion.edge,
            hints_enabled: settings.hint.enabled,
        }
    }
}

impl TryFrom<SettingsDto> for Settings {
    type Error = DtoError;

    fn try_from(dto: SettingsDto) -> Result<Self, Self::Error> {
        for (name, value) in [
            ("row_tolerance", dto.row_tolerance),
            ("edge_tolerance", dto.edge_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DtoError::Tolerance { name, value });
            }
        }
        Ok(Settings {
            insertion: InsertionTolerances {
                row: dto.row_tolerance,
                edge: dto.edge_tolerance,
            },
            hint: HintSettings {
                enabled: dto.hints_enabled,
            },
        })
    }
}
