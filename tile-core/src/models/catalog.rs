use serde::Serialize;

use super::TileType;

/// A product suggestion shown alongside an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: &'static str,
    /// Price in Indian rupees per square foot.
    pub price_per_sqft: u32,
}

impl std::fmt::Display for Suggestion {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} - ₹{}/sq.ft", self.name, self.price_per_sqft)
    }
}

const FLOOR_SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        name: "Granite Matte Tile",
        price_per_sqft: 45,
    },
    Suggestion {
        name: "Anti-skid Ceramic Tile",
        price_per_sqft: 35,
    },
];

const WALL_SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        name: "Glossy Wall Tile",
        price_per_sqft: 30,
    },
    Suggestion {
        name: "Designer Mosaic Tile",
        price_per_sqft: 50,
    },
];

pub fn suggestions_for(tile_type: TileType) -> &'static [Suggestion] {
    match tile_type {
        TileType::Floor => FLOOR_SUGGESTIONS,
        TileType::Wall => WALL_SUGGESTIONS,
    }
}
