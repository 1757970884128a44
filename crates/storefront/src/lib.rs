//! Sungrove Storefront core library.
//!
//! The pieces a front end composes into a storefront:
//!
//! - [`catalog`] - paginated product fetches against the remote catalog API
//! - [`cart`] - the shopping cart: mutations, derived totals, persistence
//! - [`config`] - environment-driven configuration
//! - [`state`] - the [`state::AppState`] composition root owning the above
//!
//! View rendering, routing, and i18n live in the embedding application;
//! this crate is deliberately UI-free.
//!
//! # Example
//!
//! ```rust,ignore
//! use sungrove_storefront::state::AppState;
//!
//! let mut state = AppState::from_env()?;
//! let page = state.catalog().fetch_products(state.page_query(1)).await?;
//! if let Some(product) = page.products.first() {
//!     state.cart_mut().add(product.clone(), 1);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
