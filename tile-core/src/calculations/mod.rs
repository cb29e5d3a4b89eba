//! Quantity calculations for tiling a surface.
//!
//! Area is normalized to square feet by [`units`], then [`estimator`] turns
//! it into a tile and box count for a given tile size.

pub mod common;
pub mod estimator;
pub mod units;

pub use estimator::{BOX_SIZE, EstimateError, TileEstimator, WASTAGE_FACTOR};
pub use units::{SQFT_PER_SQM, checked_to_square_feet, to_square_feet};
