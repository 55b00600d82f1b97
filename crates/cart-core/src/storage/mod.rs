//! Cart Persistence
//!
//! A device-scoped key-value store holding the serialized cart.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::sync::Arc;

use crate::error::Result;

/// Key the cart is persisted under
pub const CART_STORAGE_KEY: &str = "pc_computer_cart";

/// Key-value storage trait (Strategy pattern)
///
/// Implement this for each place a cart can live: browser `localStorage`,
/// a directory on disk, process memory.
pub trait CartStorage {
    /// Read the raw value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` entirely; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: CartStorage + ?Sized> CartStorage for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
