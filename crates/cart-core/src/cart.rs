//! Cart Store
//!
//! The single source of truth for what the visitor intends to buy. Every
//! mutation is written through to a [`CartStorage`] immediately; storage
//! failures are logged and never undo the in-memory change.

use std::collections::HashSet;

use crate::error::{CartError, Result};
use crate::model::{CartItem, NewCartItem, ShoppingItem};
use crate::storage::{CART_STORAGE_KEY, CartStorage};

/// Persisted shopping cart
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    items: Vec<CartItem>,
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the cart stored under the default key
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, CART_STORAGE_KEY)
    }

    /// Load the cart stored under `key`.
    ///
    /// Missing data yields an empty cart. Unreadable or malformed data is
    /// logged and also yields an empty cart.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let items = match storage.read(&key) {
            Ok(Some(raw)) => decode_cart(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %key, error = %e, "Discarding malformed stored cart");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to load cart from storage");
                Vec::new()
            }
        };

        tracing::debug!(key = %key, lines = items.len(), "Loaded cart");

        Self { items, storage, key }
    }

    /// Items in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the backing storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one unit of a product, appending a new line if it is not in the cart yet
    pub fn add_to_cart(&mut self, item: NewCartItem) {
        if let Some(existing) = self.find_mut(&item.product_id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(item.into_cart_item(1));
        }
        self.persist();
    }

    /// Set the quantity of a line; zero or less removes it.
    ///
    /// Unknown product ids are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(existing) = self.find_mut(product_id) {
            existing.quantity = quantity;
            self.persist();
        }
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Empty the cart and delete the stored record
    pub fn clear_cart(&mut self) {
        self.items.clear();
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "Failed to erase stored cart");
        }
    }

    /// Exact sum of `price_in_cents * quantity` over all lines
    pub fn cart_total(&self) -> u128 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total units across all lines
    pub fn cart_item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Project the cart into the backend's checkout payload
    pub fn shopping_items(&self) -> Vec<ShoppingItem> {
        self.items.iter().map(ShoppingItem::from).collect()
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.product_id == product_id)
    }

    fn persist(&self) {
        let result = encode_cart(&self.items).and_then(|raw| self.storage.write(&self.key, &raw));
        if let Err(e) = result {
            tracing::warn!(key = %self.key, error = %e, "Failed to save cart to storage");
        }
    }
}

/// Serialize cart lines to the stored record format
pub fn encode_cart(items: &[CartItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Decode and validate a stored record
pub fn decode_cart(raw: &str) -> Result<Vec<CartItem>> {
    let items: Vec<CartItem> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for item in &items {
        if item.quantity == 0 {
            return Err(CartError::Decode(format!(
                "product {} has zero quantity",
                item.product_id
            )));
        }
        if !seen.insert(item.product_id.as_str()) {
            return Err(CartError::Decode(format!(
                "product {} appears more than once",
                item.product_id
            )));
        }
    }

    Ok(items)
}
