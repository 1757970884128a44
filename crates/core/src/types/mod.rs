//! Core types for Sungrove.
//!
//! This module provides the domain types shared by the catalog and the cart.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::CartLine;
pub use id::*;
pub use product::{Product, ProductPage};
