use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing model values that carry invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Tile length must be strictly positive.
    #[error("tile length must be positive, got {0}")]
    InvalidTileLength(Decimal),

    /// Tile width must be strictly positive.
    #[error("tile width must be positive, got {0}")]
    InvalidTileWidth(Decimal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Floor,
    Wall,
}

impl TileType {
    pub fn all() -> &'static [TileType] {
        &[TileType::Floor, TileType::Wall]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" => Some(Self::Floor),
            "wall" => Some(Self::Wall),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Floor => "Floor",
            Self::Wall => "Wall",
        }
    }
}

/// Length and width of a single tile, in inches.
///
/// Both sides are strictly positive, which keeps the tile area non-zero for
/// the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileDimensions {
    length_in: Decimal,
    width_in: Decimal,
}

impl TileDimensions {
    /// # Errors
    ///
    /// Returns [`ModelError`] if either side is zero or negative.
    pub fn new(
        length_in: Decimal,
        width_in: Decimal,
    ) -> Result<Self, ModelError> {
        if length_in <= Decimal::ZERO {
            return Err(ModelError::InvalidTileLength(length_in));
        }
        if width_in <= Decimal::ZERO {
            return Err(ModelError::InvalidTileWidth(width_in));
        }
        Ok(Self {
            length_in,
            width_in,
        })
    }

    pub fn length_in(&self) -> Decimal {
        self.length_in
    }

    pub fn width_in(&self) -> Decimal {
        self.width_in
    }
}

/// The preset tile sizes offered by the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSize {
    #[default]
    #[serde(rename = "12x12")]
    TwelveByTwelve,
    #[serde(rename = "24x24")]
    TwentyFourByTwentyFour,
    #[serde(rename = "18x12")]
    EighteenByTwelve,
    #[serde(rename = "36x18")]
    ThirtySixByEighteen,
}

impl TileSize {
    pub fn all() -> &'static [TileSize] {
        &[
            TileSize::TwelveByTwelve,
            TileSize::TwentyFourByTwentyFour,
            TileSize::EighteenByTwelve,
            TileSize::ThirtySixByEighteen,
        ]
    }

    /// `(length, width)` in whole inches.
    pub fn inches(&self) -> (u32, u32) {
        match self {
            Self::TwelveByTwelve => (12, 12),
            Self::TwentyFourByTwentyFour => (24, 24),
            Self::EighteenByTwelve => (18, 12),
            Self::ThirtySixByEighteen => (36, 18),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TwelveByTwelve => "12 x 12",
            Self::TwentyFourByTwentyFour => "24 x 24",
            Self::EighteenByTwelve => "18 x 12",
            Self::ThirtySixByEighteen => "36 x 18",
        }
    }

    /// Accepts `"18x12"`, `"18 x 12"` and `"18X12"`.
    pub fn parse(s: &str) -> Option<Self> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|size| {
                let (l, w) = size.inches();
                compact == format!("{l}x{w}")
            })
    }

    pub fn dimensions(&self) -> TileDimensions {
        let (length, width) = self.inches();
        TileDimensions {
            length_in: Decimal::from(length),
            width_in: Decimal::from(width),
        }
    }
}
