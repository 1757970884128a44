//! Catalog client implementation over `reqwest`.

use std::sync::Arc;

use sungrove_core::ProductPage;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;

use super::{CatalogError, ProductQuery};

/// Client for the catalog products API.
///
/// Cheaply cloneable; all clones share one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

#[derive(Debug)]
struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Fetch one page of products.
    ///
    /// Issues a single `GET {base_url}?limit={limit}&skip={skip}` and decodes
    /// the body as a [`ProductPage`], trusting the catalog's schema. The same
    /// query always produces the same request; responses are not cached.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on any transport, status, or decode failure.
    /// The cause is logged here and not propagated.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self, query: ProductQuery) -> Result<ProductPage, CatalogError> {
        let url = page_url(&self.inner.base_url, query);
        debug!(%url, "requesting catalog page");

        let response = self.inner.client.get(&url).send().await.map_err(|e| {
            tracing::error!(error = %e, "catalog request failed");
            CatalogError
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "catalog returned non-success status");
            return Err(CatalogError);
        }

        response.json::<ProductPage>().await.map_err(|e| {
            tracing::error!(error = %e, "failed to decode catalog response");
            CatalogError
        })
    }
}

/// Build the request URL for a page query.
fn page_url(base_url: &str, query: ProductQuery) -> String {
    format!("{base_url}?limit={}&skip={}", query.limit, query.skip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_default_pagination() {
        assert_eq!(
            page_url("https://dummyjson.com/products", ProductQuery::default()),
            "https://dummyjson.com/products?limit=6&skip=0"
        );
    }

    #[test]
    fn test_page_url_second_page() {
        assert_eq!(
            page_url("https://dummyjson.com/products", ProductQuery::new(2, 6)),
            "https://dummyjson.com/products?limit=6&skip=6"
        );
    }

    #[test]
    fn test_same_query_builds_same_url() {
        let query = ProductQuery::new(4, 12);
        assert_eq!(page_url("http://localhost/p", query), page_url("http://localhost/p", query));
    }
}
