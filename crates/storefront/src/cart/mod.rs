//! Shopping cart state and persistence.
//!
//! The cart is an in-memory collection of [`CartLine`]s, keyed uniquely by
//! product id, with explicit mutate-then-persist semantics: every public
//! mutation rewrites the whole collection into the `"cart"` storage slot.
//! At construction the store hydrates itself from that slot once.
//!
//! Derived values (`total_items`, `total_price`, `ordered_lines`) are
//! recomputed on every read.

pub mod storage;

pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};

use chrono::Utc;
use rust_decimal::Decimal;
use sungrove_core::{CartLine, Product, ProductId};
use tracing::warn;

/// Storage slot holding the serialized cart.
pub const CART_SLOT: &str = "cart";

/// The shopping cart store.
///
/// Owned by the application's composition root (see
/// [`crate::state::AppState`]) and passed by reference to whatever needs it.
/// Mutations are synchronous; persistence is a side effect of each mutation,
/// observable only through the storage backend.
#[derive(Debug)]
pub struct CartStore<S> {
    lines: Vec<CartLine>,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store over `storage`, hydrating once from the cart slot.
    ///
    /// A missing, unreadable, or unparseable slot yields an empty cart. A
    /// corrupt slot is recoverable state, not a startup failure, so it is
    /// logged and discarded.
    pub fn new(storage: S) -> Self {
        let lines = hydrate(&storage);
        Self { lines, storage }
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity is incremented and
    /// its recency refreshed; otherwise a new line is appended. Adding a
    /// quantity of zero is ignored, so a present line always has a quantity
    /// of at least 1.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            line.added_at = Utc::now();
        } else {
            self.lines.push(CartLine {
                product,
                quantity,
                added_at: Utc::now(),
            });
        }

        self.persist();
    }

    /// Remove `quantity` units of the product with `product_id`.
    ///
    /// No-op when the product is not in the cart. The quantity is floored at
    /// zero; a line that reaches zero is dropped from the cart entirely.
    pub fn remove(&mut self, product_id: ProductId, quantity: u32) {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product_id)
        else {
            return;
        };

        line.quantity = line.quantity.saturating_sub(quantity);
        if line.quantity == 0 {
            self.lines.retain(|l| l.product.id != product_id);
        }

        self.persist();
    }

    /// Empty the cart unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Total price of the cart: Σ unit price × quantity.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Snapshot of the lines sorted by recency, most recently touched first.
    #[must_use]
    pub fn ordered_lines(&self) -> Vec<CartLine> {
        let mut ordered = self.lines.clone();
        ordered.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        ordered
    }

    /// The storage backend this store persists into.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serialize the whole collection into the cart slot.
    ///
    /// Mutations are infallible by contract; a failed write is logged and
    /// otherwise swallowed.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.lines) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.set(CART_SLOT, &json) {
            tracing::error!(error = %e, "failed to persist cart");
        }
    }
}

/// Read the cart slot once, falling back to an empty cart on any failure.
fn hydrate<S: CartStorage>(storage: &S) -> Vec<CartLine> {
    let raw = match storage.get(CART_SLOT) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read persisted cart, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(lines) => lines,
        Err(e) => {
            warn!(error = %e, "persisted cart is not valid JSON, starting empty");
            Vec::new()
        }
    }
}
