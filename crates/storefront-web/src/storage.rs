//! Browser Storage
//!
//! `CartStorage` over `window.localStorage`, scoped to the page's origin.

use cart_core::{CartError, CartStorage, Result};
use wasm_bindgen::JsValue;

/// `localStorage` handle; looked up on every call so the type stays `Send + Sync`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> std::result::Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or("no window")?;
        window
            .local_storage()
            .map_err(|e| describe(&e))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl CartStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let storage = Self::local().map_err(CartError::PersistenceRead)?;
        storage
            .get_item(key)
            .map_err(|e| CartError::PersistenceRead(describe(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::local().map_err(CartError::PersistenceWrite)?;
        // Quota errors surface here.
        storage
            .set_item(key, value)
            .map_err(|e| CartError::PersistenceWrite(describe(&e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let storage = Self::local().map_err(CartError::PersistenceWrite)?;
        storage
            .remove_item(key)
            .map_err(|e| CartError::PersistenceWrite(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
