//! Chain-agnostic grocery item representation.

use serde::{Deserialize, Serialize};

/// Sentinel distance used when an item's store distance has not been computed.
pub const UNKNOWN_DISTANCE: f64 = -1.0;

/// A grocery item normalized from a chain's provider-specific search result,
/// comparable across chains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Free-text description. Most providers do not supply one.
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Display name of the chain the item was found at.
    pub chain_name: String,
    /// Miles from the query point to the store stocking this item, or
    /// [`UNKNOWN_DISTANCE`] when no distance has been computed.
    pub distance: f64,
    /// Shelf price in dollars. Adapters only emit items with a finite
    /// price greater than zero.
    pub price: Option<f64>,
    /// Numeric amount for `unit_of_measure`, e.g. `0.5` for `"1/2 LB"`.
    pub quantity: f64,
    /// Unit-of-measure label for `quantity` (`"LB"`, `"GAL"`, `"FL OZ"`).
    /// Empty when the provider supplied none.
    pub unit_of_measure: String,
}

impl Item {
    /// Price per single unit of measure, when a price is known and the
    /// quantity is positive.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        match self.price {
            Some(price) if self.quantity > 0.0 => Some(price / self.quantity),
            _ => None,
        }
    }

    /// Returns `true` when the item's store distance has been computed.
    #[must_use]
    pub fn has_known_distance(&self) -> bool {
        self.distance >= 0.0
    }
}
