//! Approximate area detection from a photo or plan.
//!
//! The image is reduced to grayscale and split with an inverted binary
//! threshold: every pixel at or below [`INTENSITY_THRESHOLD`] is covered
//! area. The pixel count is divided by [`PIXELS_PER_SQFT`], which assumes one
//! pixel per square centimeter. No scale calibration is done, so the result
//! is only as good as that assumption.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageError, ImageReader};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tile_core::calculations::common::round_two_places;
use tracing::debug;

use crate::error::ImageAreaError;

/// Pixels brighter than this are background.
pub const INTENSITY_THRESHOLD: u8 = 200;

/// Square centimeters in one square foot.
pub const PIXELS_PER_SQFT: Decimal = dec!(929.0304);

/// Number of pixels at or below [`INTENSITY_THRESHOLD`].
pub fn covered_pixels(image: &GrayImage) -> u64 {
    image
        .pixels()
        .filter(|pixel| pixel.0[0] <= INTENSITY_THRESHOLD)
        .count() as u64
}

/// Converts a covered-pixel count to square feet, rounded to two places.
pub fn area_from_pixel_count(count: u64) -> Decimal {
    round_two_places(Decimal::from(count) / PIXELS_PER_SQFT)
}

/// Estimated covered area of `image`, in square feet.
pub fn detect_area(image: &DynamicImage) -> Decimal {
    let gray = image.to_luma8();
    let count = covered_pixels(&gray);
    let area = area_from_pixel_count(count);
    debug!(
        width = gray.width(),
        height = gray.height(),
        covered = count,
        %area,
        "detected area from image"
    );
    area
}

/// Opens the image at `path` and estimates its covered area.
///
/// # Errors
///
/// Returns [`ImageAreaError::Decode`] if the file cannot be opened or is not
/// a decodable image.
pub fn detect_area_from_path(path: &Path) -> Result<Decimal, ImageAreaError> {
    let decode_error = |source: ImageError| ImageAreaError::Decode {
        path: path.to_path_buf(),
        source,
    };

    // Format comes from the file content, so a mislabeled extension still decodes.
    let image = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;
    Ok(detect_area(&image))
}
