//! # cart-core
//!
//! The storefront's client-side shopping cart.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  add / update / remove  ┌──────────────┐  write-through  ┌──────────────┐
//! │   UI layer   │────────────────────────▶│  CartStore   │────────────────▶│ CartStorage  │
//! │ (web / cli)  │◀────────────────────────│  (in memory) │◀────────────────│ (key/value)  │
//! └──────────────┘   totals, line items    └──────────────┘   load on init  └──────────────┘
//! ```
//!
//! The `CartStore` is an explicit value: construct it when the session starts
//! and hand it to whatever needs it. `CartStorage` lets the same store live in
//! browser `localStorage`, a directory on disk, or memory.
//!
//! ## Money
//!
//! Prices are integers in the smallest currency unit. They are persisted as
//! decimal strings so that values beyond 2^53 survive JavaScript-side readers,
//! and totals are accumulated in `u128`.
//!
//! ## Usage
//!
//! ```rust
//! use cart_core::{CartStore, MemoryStorage, NewCartItem};
//!
//! let mut cart = CartStore::load(MemoryStorage::new());
//! cart.add_to_cart(NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr"));
//! cart.add_to_cart(NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr"));
//!
//! assert_eq!(cart.cart_item_count(), 2);
//! assert_eq!(cart.cart_total(), 300_000);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod model;
pub mod money;
pub mod storage;

pub use cart::{CartStore, decode_cart, encode_cart};
pub use error::{CartError, Result};
pub use model::{CartItem, DEFAULT_CURRENCY, NewCartItem, Product, ProductCategory, ShoppingItem};
pub use money::format_price;
pub use storage::{CART_STORAGE_KEY, CartStorage, FileStorage, MemoryStorage};
