//! Cart line item type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::product::Product;

/// One line of the cart: a product snapshot plus a quantity.
///
/// The embedded [`Product`] is a snapshot taken at add-time, not a reference
/// into the live catalog. `added_at` is refreshed every time the same product
/// is added again and is used only for display ordering.
///
/// Serialized with camelCase field names (`addedAt`) to stay compatible with
/// carts persisted by earlier releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product snapshot as it was when added.
    pub product: Product,
    /// Number of units. Always at least 1 for a line present in the cart.
    pub quantity: u32,
    /// Time of the most recent add touching this line.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::types::id::ProductId;

    fn sample_line() -> CartLine {
        CartLine {
            product: Product {
                id: ProductId::new(1),
                title: "Test Product".to_string(),
                price: Decimal::from(100),
                thumbnail: "test.jpg".to_string(),
                description: "Test Description".to_string(),
            },
            quantity: 3,
            added_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).single().expect("timestamp"),
        }
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        assert_eq!(sample_line().line_total(), Decimal::from(300));
    }

    #[test]
    fn serializes_added_at_as_camel_case() {
        let json = serde_json::to_value(sample_line()).expect("serialize");
        assert!(json.get("addedAt").is_some());
        assert!(json.get("added_at").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let line = sample_line();
        let json = serde_json::to_string(&line).expect("serialize");
        let back: CartLine = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, line);
    }
}
