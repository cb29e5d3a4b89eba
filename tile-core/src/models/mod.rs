mod area;
mod catalog;
mod estimate;
mod language;
mod tile;

pub use area::{AreaMeasurement, AreaUnit, MIN_MANUAL_AREA};
pub use catalog::{Suggestion, suggestions_for};
pub use estimate::EstimateResult;
pub use language::Language;
pub use tile::{ModelError, TileDimensions, TileSize, TileType};
