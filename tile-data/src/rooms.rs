//! CSV loader for estimating several rooms at once.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Values are
//! trimmed.
//!
//! | Column      | Type    | Notes                                  |
//! |-------------|---------|----------------------------------------|
//! | `name`      | string  | Free text, e.g. `Kitchen`              |
//! | `tile_type` | string  | `floor` or `wall`                      |
//! | `area`      | decimal | At least 1.0                           |
//! | `unit`      | string  | `sqft` or `sqm`                        |
//! | `tile_size` | string  | `12x12`, `24x24`, `18x12` or `36x18`   |
//!
//! ```csv
//! name,tile_type,area,unit,tile_size
//! Kitchen,floor,120,sqft,24x24
//! Bathroom wall,wall,18.5,sqm,18 x 12
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tile_core::{
    AreaMeasurement, AreaUnit, EstimateError, EstimateResult, MIN_MANUAL_AREA, TileEstimator,
    TileSize, TileType,
};

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    tile_type: String,
    area: Decimal,
    unit: String,
    tile_size: String,
}

/// Errors that can occur while loading a room list. Row numbers are 1-based
/// and exclude the header.
#[derive(Debug, Error)]
pub enum RoomLoadError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised tile type '{value}' on row {row}")]
    InvalidTileType { value: String, row: usize },

    #[error("unrecognised unit '{value}' on row {row}")]
    InvalidUnit { value: String, row: usize },

    #[error("unrecognised tile size '{value}' on row {row}")]
    InvalidTileSize { value: String, row: usize },

    #[error("area {value} on row {row} is below the minimum of {min}", min = MIN_MANUAL_AREA)]
    AreaBelowMinimum { value: Decimal, row: usize },

    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub tile_type: TileType,
    pub area: AreaMeasurement,
    pub tile_size: TileSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEstimate {
    pub room: Room,
    pub result: EstimateResult,
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Room, RoomLoadError> {
    let tile_type = TileType::parse(&row.tile_type).ok_or_else(|| RoomLoadError::InvalidTileType {
        value: row.tile_type.clone(),
        row: row_number,
    })?;
    let unit = AreaUnit::parse(&row.unit).ok_or_else(|| RoomLoadError::InvalidUnit {
        value: row.unit.clone(),
        row: row_number,
    })?;
    let tile_size = TileSize::parse(&row.tile_size).ok_or_else(|| RoomLoadError::InvalidTileSize {
        value: row.tile_size.clone(),
        row: row_number,
    })?;
    if row.area < MIN_MANUAL_AREA {
        return Err(RoomLoadError::AreaBelowMinimum {
            value: row.area,
            row: row_number,
        });
    }

    Ok(Room {
        name: row.name,
        tile_type,
        area: AreaMeasurement::new(row.area, unit),
        tile_size,
    })
}

/// Parse CSV text into rooms, in file order.
///
/// # Errors
///
/// * [`RoomLoadError::Parse`] if the CSV is structurally invalid or a field
///   cannot be deserialised.
/// * A row-specific variant for unrecognised codes or too-small areas.
pub fn load_from_str(input: &str) -> Result<Vec<Room>, RoomLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
///
/// # Errors
///
/// Returns [`RoomLoadError::Io`] when the file cannot be read, otherwise
/// whatever [`load_from_str`] returns.
pub fn load_from_file(path: &Path) -> Result<Vec<Room>, RoomLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RoomLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

/// Estimates every room.
///
/// # Errors
///
/// Returns the first [`EstimateError`] encountered.
pub fn estimate_rooms(rooms: &[Room]) -> Result<Vec<RoomEstimate>, EstimateError> {
    let estimator = TileEstimator::new();
    rooms
        .iter()
        .map(|room| {
            let result = estimator.estimate(room.area, room.tile_size.dimensions())?;
            Ok(RoomEstimate {
                room: room.clone(),
                result,
            })
        })
        .collect()
}

/// Sum of tiles and boxes over every room, or `None` if either total
/// overflows.
pub fn total_estimate(estimates: &[RoomEstimate]) -> Option<EstimateResult> {
    estimates
        .iter()
        .try_fold(EstimateResult::default(), |total, estimate| {
            Some(EstimateResult {
                tiles: total.tiles.checked_add(estimate.result.tiles)?,
                boxes: total.boxes.checked_add(estimate.result.boxes)?,
            })
        })
}
