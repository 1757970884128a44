//! Application state: the storefront composition root.

use crate::cart::{CartStore, FileStorage};
use crate::catalog::{CatalogClient, ProductQuery};
use crate::config::StorefrontConfig;
use crate::error::AppError;

/// Everything a front end needs, constructed once at startup.
///
/// There is no global instance; the embedding application owns the state and
/// passes it by reference to whatever needs it. Reads of the cart go through
/// [`Self::cart`], mutations through [`Self::cart_mut`].
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore<FileStorage>,
}

impl AppState {
    /// Build the state from configuration.
    ///
    /// Creates the catalog client, opens the file-backed storage under the
    /// configured data directory, and hydrates the cart from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, AppError> {
        let catalog = CatalogClient::new(&config.catalog);
        let storage = FileStorage::new(&config.data_dir)?;
        let cart = CartStore::new(storage);

        Ok(Self {
            config,
            catalog,
            cart,
        })
    }

    /// Build the state from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the data directory
    /// cannot be created.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(StorefrontConfig::from_env()?)
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore<FileStorage> {
        &self.cart
    }

    /// Get a mutable reference to the cart store.
    pub fn cart_mut(&mut self) -> &mut CartStore<FileStorage> {
        &mut self.cart
    }

    /// Catalog query for the given 1-based page at the configured page size.
    #[must_use]
    pub fn page_query(&self, page: u32) -> ProductQuery {
        ProductQuery::new(page, self.config.page_size)
    }
}
