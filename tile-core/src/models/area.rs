use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Smallest area accepted from manual entry.
pub const MIN_MANUAL_AREA: Decimal = dec!(1.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "sqft")]
    SquareFeet,
    #[serde(rename = "sqm")]
    SquareMeters,
}

impl AreaUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SquareFeet => "sqft",
            Self::SquareMeters => "sqm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqft" => Some(Self::SquareFeet),
            "sqm" => Some(Self::SquareMeters),
            _ => None,
        }
    }

    /// Short label used next to displayed quantities.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SquareFeet => "sq.ft",
            Self::SquareMeters => "sq.m",
        }
    }
}

/// An area value tagged with its unit.
///
/// The value is expected to be non-negative. Nothing here enforces that;
/// manual entry is bounded at the input step and image detection can only
/// produce counts of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaMeasurement {
    pub value: Decimal,
    pub unit: AreaUnit,
}

impl AreaMeasurement {
    pub fn new(
        value: Decimal,
        unit: AreaUnit,
    ) -> Self {
        Self { value, unit }
    }

    pub fn square_feet(value: Decimal) -> Self {
        Self::new(value, AreaUnit::SquareFeet)
    }

    pub fn square_meters(value: Decimal) -> Self {
        Self::new(value, AreaUnit::SquareMeters)
    }
}

impl std::fmt::Display for AreaMeasurement {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} {}", self.value.normalize(), self.unit.label())
    }
}
