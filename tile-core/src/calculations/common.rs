//! Rounding helpers shared by the calculations.
//!
//! Everything rounds half-to-even so that a value sitting exactly on `.5`
//! always lands on the same side, independent of sign or magnitude.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole number, ties to even.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tile_core::calculations::common::round_half_even;
///
/// assert_eq!(round_half_even(dec!(10.4)), dec!(10));
/// assert_eq!(round_half_even(dec!(10.5)), dec!(10));
/// assert_eq!(round_half_even(dec!(11.5)), dec!(12));
/// assert_eq!(round_half_even(dec!(10.6)), dec!(11));
/// ```
pub fn round_half_even(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Rounds to two decimal places, ties to even.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tile_core::calculations::common::round_two_places;
///
/// assert_eq!(round_two_places(dec!(1.234)), dec!(1.23));
/// assert_eq!(round_two_places(dec!(1.235)), dec!(1.24));
/// assert_eq!(round_two_places(dec!(1.245)), dec!(1.24));
/// ```
pub fn round_two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_even tests
    // =========================================================================

    #[test]
    fn round_half_even_rounds_down_below_midpoint() {
        assert_eq!(round_half_even(dec!(109.49)), dec!(109));
    }

    #[test]
    fn round_half_even_rounds_up_above_midpoint() {
        assert_eq!(round_half_even(dec!(109.51)), dec!(110));
    }

    #[test]
    fn round_half_even_ties_go_to_even_neighbour() {
        assert_eq!(round_half_even(dec!(0.5)), dec!(0));
        assert_eq!(round_half_even(dec!(1.5)), dec!(2));
        assert_eq!(round_half_even(dec!(2.5)), dec!(2));
        assert_eq!(round_half_even(dec!(3.5)), dec!(4));
    }

    #[test]
    fn round_half_even_preserves_whole_numbers() {
        assert_eq!(round_half_even(dec!(110)), dec!(110));
    }

    #[test]
    fn round_half_even_handles_zero() {
        assert_eq!(round_half_even(dec!(0.0)), dec!(0));
    }

    // =========================================================================
    // round_two_places tests
    // =========================================================================

    #[test]
    fn round_two_places_keeps_short_values() {
        assert_eq!(round_two_places(dec!(12.5)), dec!(12.5));
    }

    #[test]
    fn round_two_places_ties_go_to_even_neighbour() {
        assert_eq!(round_two_places(dec!(0.125)), dec!(0.12));
        assert_eq!(round_two_places(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn round_two_places_handles_long_fractions() {
        assert_eq!(round_two_places(dec!(1.0763910763910763)), dec!(1.08));
    }
}
