//! Tile and box quantity estimation.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Normalize the area to square feet |
//! | 2    | Tile area: (length / 12) × (width / 12) square feet |
//! | 3    | Raw tile count: area / tile area |
//! | 4    | Buffered tile count: raw × 1.10 (wastage allowance) |
//! | 5    | Box count: buffered / 10 (tiles per box) |
//! | 6    | Round tiles and boxes half-to-even |
//!
//! The box count is taken from the unrounded buffered tile count, so the two
//! outputs are rounded independently.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tile_core::{AreaMeasurement, TileEstimator, TileSize};
//!
//! let estimator = TileEstimator::new();
//! let result = estimator
//!     .estimate(
//!         AreaMeasurement::square_feet(dec!(100)),
//!         TileSize::TwelveByTwelve.dimensions(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(result.tiles, 110);
//! assert_eq!(result.boxes, 11);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_half_even;
use crate::calculations::units::checked_to_square_feet;
use crate::{AreaMeasurement, EstimateResult, TileDimensions};

/// Extra tiles bought to cover cutting waste (10%).
pub const WASTAGE_FACTOR: Decimal = dec!(1.10);

/// Tiles per box.
pub const BOX_SIZE: Decimal = dec!(10);

const SQ_INCHES_PER_SQ_FOOT: Decimal = dec!(144);

/// Errors that can occur while estimating quantities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// The area, once converted to square feet, is below zero.
    #[error("area must not be negative, got {0} sq.ft")]
    NegativeArea(Decimal),

    /// The area, an intermediate value or a rounded count does not fit.
    /// Carries the area in square feet, or the raw input when even the unit
    /// conversion overflowed.
    #[error("estimate for area {0} is too large to represent")]
    Overflow(Decimal),
}

/// Stateless calculator for tile and box quantities.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileEstimator;

impl TileEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimates the tiles and boxes needed to cover `area` with tiles of
    /// size `tile`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError`] if:
    /// - The normalized area is negative
    /// - An intermediate value or a rounded count overflows
    pub fn estimate(
        &self,
        area: AreaMeasurement,
        tile: TileDimensions,
    ) -> Result<EstimateResult, EstimateError> {
        let area_sqft = checked_to_square_feet(area)
            .ok_or(EstimateError::Overflow(area.value))?
            .value;
        if area_sqft < Decimal::ZERO {
            return Err(EstimateError::NegativeArea(area_sqft));
        }

        let raw_tiles = self.raw_tile_count(area_sqft, tile)?;
        let buffered_tiles = self.buffered_tile_count(area_sqft, raw_tiles)?;
        let boxes = self.box_count(buffered_tiles);

        let result = EstimateResult {
            tiles: self.to_count(area_sqft, buffered_tiles)?,
            boxes: self.to_count(area_sqft, boxes)?,
        };

        debug!(
            %area_sqft,
            length_in = %tile.length_in(),
            width_in = %tile.width_in(),
            tiles = result.tiles,
            boxes = result.boxes,
            "estimated tile quantity"
        );

        Ok(result)
    }

    /// Tiles needed before wastage.
    ///
    /// Computed as `area × 144 / (length × width)`, which equals area over
    /// the tile's square footage without rounding `length / 12` first.
    fn raw_tile_count(
        &self,
        area_sqft: Decimal,
        tile: TileDimensions,
    ) -> Result<Decimal, EstimateError> {
        tile.length_in()
            .checked_mul(tile.width_in())
            .and_then(|tile_sq_inches| {
                area_sqft
                    .checked_mul(SQ_INCHES_PER_SQ_FOOT)?
                    .checked_div(tile_sq_inches)
            })
            .ok_or(EstimateError::Overflow(area_sqft))
    }

    fn buffered_tile_count(
        &self,
        area_sqft: Decimal,
        raw_tiles: Decimal,
    ) -> Result<Decimal, EstimateError> {
        raw_tiles
            .checked_mul(WASTAGE_FACTOR)
            .ok_or(EstimateError::Overflow(area_sqft))
    }

    fn box_count(
        &self,
        buffered_tiles: Decimal,
    ) -> Decimal {
        buffered_tiles / BOX_SIZE
    }

    fn to_count(
        &self,
        area_sqft: Decimal,
        value: Decimal,
    ) -> Result<u64, EstimateError> {
        round_half_even(value)
            .to_u64()
            .ok_or(EstimateError::Overflow(area_sqft))
    }
}
