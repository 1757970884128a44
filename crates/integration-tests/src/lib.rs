//! Integration test support for Sungrove.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sungrove-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_fetch` - Catalog client against a local mock endpoint
//! - `cart_persistence` - Cart store over file-backed storage
//!
//! The mock catalog serves the same contract as the real endpoint: `GET
//! /products?limit={limit}&skip={skip}` answered with a product page that
//! echoes the applied `limit`/`skip` back, which is how the tests observe
//! the offsets the client actually requested.

use std::net::SocketAddr;

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use rust_decimal::Decimal;
use serde::Deserialize;
use sungrove_core::{Product, ProductId, ProductPage};

/// Catalog-wide product count reported by the mock.
pub const MOCK_CATALOG_TOTAL: u64 = 100;

#[derive(Debug, Deserialize)]
struct PageParams {
    limit: u32,
    skip: u32,
}

/// Serve `limit` sequentially numbered products starting after `skip`.
async fn products(Query(params): Query<PageParams>) -> Json<ProductPage> {
    let products = (0..params.limit)
        .map(|i| {
            let id = i64::from(params.skip + i + 1);
            Product {
                id: ProductId::new(id),
                title: format!("Product {id}"),
                price: Decimal::from(10),
                thumbnail: format!("https://cdn.example.com/{id}.jpg"),
                description: "A mock catalog product".to_string(),
            }
        })
        .collect();

    Json(ProductPage {
        products,
        total: MOCK_CATALOG_TOTAL,
        skip: params.skip,
        limit: params.limit,
    })
}

async fn unavailable() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn garbled() -> &'static str {
    "<!doctype html><title>not json</title>"
}

/// Handle to a mock catalog server on an ephemeral local port.
#[derive(Debug)]
pub struct CatalogMock {
    addr: SocketAddr,
}

impl CatalogMock {
    /// Spawn the mock server.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn() -> Self {
        let app = Router::new()
            .route("/products", get(products))
            .route("/unavailable", get(unavailable))
            .route("/garbled", get(garbled));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("serve mock catalog");
        });

        Self { addr }
    }

    /// URL of the well-behaved products endpoint.
    #[must_use]
    pub fn products_url(&self) -> String {
        format!("http://{}/products", self.addr)
    }

    /// URL of a route that always answers 500.
    #[must_use]
    pub fn unavailable_url(&self) -> String {
        format!("http://{}/unavailable", self.addr)
    }

    /// URL of a route that answers 200 with a non-JSON body.
    #[must_use]
    pub fn garbled_url(&self) -> String {
        format!("http://{}/garbled", self.addr)
    }
}

/// Initialize test logging once; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sungrove_storefront=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
