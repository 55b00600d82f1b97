//! Application State

use std::path::PathBuf;

use anyhow::Context;
use cart_checkout::{CheckoutConfig, CheckoutInitiator, HttpBackend, Navigator, PurchaseFlow, Url};
use cart_core::{CartStore, FileStorage};

/// Where the cart lives when `STOREFRONT_DATA_DIR` is unset
pub const DEFAULT_DATA_DIR: &str = ".storefront";

pub type Shop = PurchaseFlow<FileStorage, HttpBackend, TerminalNavigator>;

/// "Navigates" by printing the payment page for the user to open
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &Url) -> cart_checkout::Result<()> {
        println!("Continue to payment: {url}");
        Ok(())
    }
}

/// Resolve the cart directory: explicit flag, then the environment, then the default
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os("STOREFRONT_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Load the persisted cart and wire it to the configured backend
pub fn open(dir: PathBuf) -> anyhow::Result<Shop> {
    let config = CheckoutConfig::from_env();
    let backend = HttpBackend::from_config(&config).context("failed to build checkout client")?;

    tracing::debug!(dir = %dir.display(), backend = %config.backend_url, "Opening cart");

    let cart = CartStore::load(FileStorage::new(dir));
    Ok(PurchaseFlow::new(
        cart,
        CheckoutInitiator::new(backend, config),
        TerminalNavigator,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = data_dir(Some(PathBuf::from("/tmp/cart")));
        assert_eq!(dir, PathBuf::from("/tmp/cart"));
    }

    #[test]
    fn test_open_starts_from_persisted_cart() {
        let tmp = tempfile::tempdir().unwrap();
        let shop = open(tmp.path().to_path_buf()).unwrap();
        assert!(shop.cart().is_empty());
        assert_eq!(shop.cart().storage().dir(), tmp.path());
    }

    #[test]
    fn test_terminal_navigator_never_fails() {
        let url = Url::parse("https://pay.example/s/1").unwrap();
        assert!(TerminalNavigator.navigate(&url).is_ok());
    }
}
