//! Catalog API client.
//!
//! The catalog is a plain REST endpoint paginated with `limit`/`skip` query
//! parameters. One GET per page request - no caching, no retry, no auth.

mod client;

pub use client::CatalogClient;

use thiserror::Error;

/// Error returned by [`CatalogClient::fetch_products`].
///
/// The underlying cause (transport failure, non-2xx status, undecodable
/// body) is logged at error level and not carried on the value; callers
/// only ever see this one generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to fetch products")]
pub struct CatalogError;

/// One page worth of catalog to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuery {
    /// 1-based page number.
    pub page: u32,
    /// Products per page.
    pub limit: u32,
}

impl ProductQuery {
    /// Create a query for the given page and page size.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Number of leading catalog entries this page skips.
    ///
    /// Pages are 1-based; a page of 0 is clamped to the first page.
    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.page.saturating_sub(1) * self.limit
    }
}

impl Default for ProductQuery {
    /// First page at the catalog's customary page size of 6.
    fn default() -> Self {
        Self { page: 1, limit: 6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ProductQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 6);
    }

    #[test]
    fn test_skip_is_zero_for_first_page() {
        assert_eq!(ProductQuery::new(1, 6).skip(), 0);
    }

    #[test]
    fn test_skip_advances_by_limit_per_page() {
        assert_eq!(ProductQuery::new(2, 6).skip(), 6);
        assert_eq!(ProductQuery::new(3, 6).skip(), 12);
        assert_eq!(ProductQuery::new(5, 24).skip(), 96);
    }

    #[test]
    fn test_skip_clamps_page_zero_to_first_page() {
        assert_eq!(ProductQuery::new(0, 6).skip(), 0);
    }

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(CatalogError.to_string(), "Failed to fetch products");
    }
}
