use rust_decimal::Decimal;
use thiserror::Error;
use tile_core::MIN_MANUAL_AREA;

/// Why a typed area was not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AreaInputError {
    #[error("no area entered")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("area must be at least {min}", min = MIN_MANUAL_AREA)]
    BelowMinimum(Decimal),
}

/// Parses a typed area.
///
/// Commas are treated as thousands separators (`"1,250.5"`). The value must
/// be at least [`MIN_MANUAL_AREA`].
pub fn parse_area_input(s: &str) -> Result<Decimal, AreaInputError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Err(AreaInputError::Empty);
    }
    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid area: {}", e);
        AreaInputError::NotANumber(s.trim().to_string())
    })?;
    if value < MIN_MANUAL_AREA {
        return Err(AreaInputError::BelowMinimum(value));
    }
    Ok(value)
}

/// Maps a 1-based menu answer onto `options`.
///
/// The answer may be the item number or, case-insensitively, the item's
/// label.
pub fn parse_menu_choice<T: Copy>(
    input: &str,
    options: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Option<T> {
    let answer = input.trim();
    if let Ok(number) = answer.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|idx| options.get(idx))
            .copied();
    }
    options
        .iter()
        .find(|option| label(option).eq_ignore_ascii_case(answer))
        .copied()
}

/// True for `y`/`yes`, case-insensitive.
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tile_core::{TileSize, TileType};

    use super::*;

    #[test]
    fn parse_area_accepts_comma_thousands_separator() {
        assert_eq!(parse_area_input("1,250.5"), Ok(dec!(1250.5)));
    }

    #[test]
    fn parse_area_trims_whitespace() {
        assert_eq!(parse_area_input("  42  "), Ok(dec!(42)));
    }

    #[test]
    fn parse_area_empty_is_error() {
        assert_eq!(parse_area_input("   "), Err(AreaInputError::Empty));
    }

    #[test]
    fn parse_area_rejects_text() {
        assert_eq!(
            parse_area_input("ten"),
            Err(AreaInputError::NotANumber("ten".to_string()))
        );
    }

    #[test]
    fn parse_area_enforces_minimum() {
        assert_eq!(
            parse_area_input("0.5"),
            Err(AreaInputError::BelowMinimum(dec!(0.5)))
        );
        assert_eq!(parse_area_input("1"), Ok(dec!(1)));
    }

    #[test]
    fn menu_choice_by_number() {
        assert_eq!(
            parse_menu_choice("3", TileSize::all(), TileSize::label),
            Some(TileSize::EighteenByTwelve)
        );
    }

    #[test]
    fn menu_choice_out_of_range() {
        assert_eq!(parse_menu_choice("0", TileType::all(), TileType::label), None);
        assert_eq!(parse_menu_choice("3", TileType::all(), TileType::label), None);
    }

    #[test]
    fn menu_choice_by_label() {
        assert_eq!(
            parse_menu_choice(" wall ", TileType::all(), TileType::label),
            Some(TileType::Wall)
        );
        assert_eq!(
            parse_menu_choice("24 X 24", TileSize::all(), TileSize::label),
            Some(TileSize::TwentyFourByTwentyFour)
        );
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("Y"));
        assert!(is_yes(" yes "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}
