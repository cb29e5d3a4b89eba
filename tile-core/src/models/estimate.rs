use serde::{Deserialize, Serialize};

/// Purchasable quantity for one surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Tiles required, wastage included.
    pub tiles: u64,

    /// Boxes required at the fixed packaging size.
    pub boxes: u64,
}
