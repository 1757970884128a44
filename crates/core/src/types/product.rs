//! Catalog product types.
//!
//! These mirror the remote catalog API's JSON schema. The catalog is the
//! source of truth - the client never mutates a [`Product`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A product as served by the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-wide unique ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price. The catalog does not specify a currency.
    pub price: Decimal,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Long-form description.
    pub description: String,
}

/// One page of catalog results.
///
/// Transient: produced by a fetch, consumed by the view layer, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Catalog-wide product count.
    pub total: u64,
    /// Offset actually applied by the catalog.
    pub skip: u32,
    /// Page size actually applied by the catalog.
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_page_deserializes_from_catalog_json() {
        // Shape returned by the catalog endpoint, price as a plain number.
        let json = r#"{
            "products": [
                {
                    "id": 1,
                    "title": "Essence Mascara Lash Princess",
                    "price": 9.99,
                    "thumbnail": "https://cdn.example.com/1/thumbnail.jpg",
                    "description": "Popular mascara known for volumizing effects."
                }
            ],
            "total": 194,
            "skip": 0,
            "limit": 6
        }"#;

        let page: ProductPage = serde_json::from_str(json).expect("deserialize page");
        assert_eq!(page.total, 194);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 6);
        assert_eq!(page.products.len(), 1);

        let product = &page.products[0];
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, "9.99".parse::<Decimal>().expect("decimal"));
    }
}
