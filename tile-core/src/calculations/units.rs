//! Area unit normalization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{AreaMeasurement, AreaUnit};

/// Square feet in one square meter.
pub const SQFT_PER_SQM: Decimal = dec!(10.7639);

/// Returns `area` expressed in square feet.
///
/// Square meters are scaled by [`SQFT_PER_SQM`]; square feet pass through
/// unchanged. Negative values are converted like any other.
///
/// # Panics
///
/// Panics if the scaled value does not fit a `Decimal`. Use
/// [`checked_to_square_feet`] for unbounded input.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tile_core::{AreaMeasurement, AreaUnit, to_square_feet};
///
/// let area = to_square_feet(AreaMeasurement::square_meters(dec!(10)));
/// assert_eq!(area.value, dec!(107.639));
/// assert_eq!(area.unit, AreaUnit::SquareFeet);
/// ```
pub fn to_square_feet(area: AreaMeasurement) -> AreaMeasurement {
    match area.unit {
        AreaUnit::SquareFeet => area,
        AreaUnit::SquareMeters => AreaMeasurement::square_feet(area.value * SQFT_PER_SQM),
    }
}

/// Like [`to_square_feet`], but returns `None` when the square-meter value
/// is too large to convert.
pub fn checked_to_square_feet(area: AreaMeasurement) -> Option<AreaMeasurement> {
    match area.unit {
        AreaUnit::SquareFeet => Some(area),
        AreaUnit::SquareMeters => area
            .value
            .checked_mul(SQFT_PER_SQM)
            .map(AreaMeasurement::square_feet),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn square_feet_is_identity() {
        let area = AreaMeasurement::square_feet(dec!(123.45));

        assert_eq!(to_square_feet(area), area);
    }

    #[test]
    fn square_meters_scale_by_conversion_factor() {
        let result = to_square_feet(AreaMeasurement::square_meters(dec!(1)));

        assert_eq!(result, AreaMeasurement::square_feet(dec!(10.7639)));
    }

    #[test]
    fn square_meters_fractional_value() {
        let result = to_square_feet(AreaMeasurement::square_meters(dec!(2.5)));

        assert_eq!(result.value, dec!(26.90975));
    }

    #[test]
    fn zero_square_meters_is_zero_square_feet() {
        let result = to_square_feet(AreaMeasurement::square_meters(dec!(0)));

        assert_eq!(result.value, dec!(0));
        assert_eq!(result.unit, AreaUnit::SquareFeet);
    }

    #[test]
    fn checked_conversion_matches_unchecked() {
        let area = AreaMeasurement::square_meters(dec!(2.5));

        assert_eq!(checked_to_square_feet(area), Some(to_square_feet(area)));
    }

    #[test]
    fn checked_conversion_of_huge_square_meters_is_none() {
        let area = AreaMeasurement::square_meters(Decimal::MAX);

        assert_eq!(checked_to_square_feet(area), None);
    }

    #[test]
    fn checked_conversion_of_huge_square_feet_passes_through() {
        let area = AreaMeasurement::square_feet(Decimal::MAX);

        assert_eq!(checked_to_square_feet(area), Some(area));
    }

    #[test]
    fn negative_values_are_converted_without_validation() {
        let result = to_square_feet(AreaMeasurement::square_meters(dec!(-1)));

        assert_eq!(result.value, dec!(-10.7639));
    }
}
