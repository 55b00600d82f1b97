//! API Client

use cart_checkout::{
    CheckoutConfig, CheckoutError, CheckoutInitiator, HttpBackend, Navigator, SessionStatus, Url,
};
use cart_core::{Product, ShoppingItem, catalog};

/// Sends the browser to another page, leaving this app behind
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &Url) -> cart_checkout::Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| CheckoutError::Navigation("no window".into()))?;
        window
            .location()
            .set_href(url.as_str())
            .map_err(|e| CheckoutError::Navigation(format!("{e:?}")))
    }
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

fn initiator() -> cart_checkout::Result<CheckoutInitiator<HttpBackend>> {
    let origin = origin();
    let config = CheckoutConfig {
        backend_url: origin.clone(),
        ..CheckoutConfig::default()
    }
    .with_origin(origin);

    Ok(CheckoutInitiator::new(HttpBackend::from_config(&config)?, config))
}

/// Create a checkout session for `items` and navigate to it
pub async fn start_checkout(items: &[ShoppingItem]) -> cart_checkout::Result<()> {
    let session = initiator()?.create_checkout_session(items).await?;
    BrowserNavigator.navigate(&session.url)
}

/// Buy one unit of `product` and navigate to the payment page
pub async fn buy_now(product: &Product) -> cart_checkout::Result<()> {
    let session = initiator()?.buy_now(product).await?;
    BrowserNavigator.navigate(&session.url)
}

pub async fn session_status(session_id: &str) -> cart_checkout::Result<SessionStatus> {
    initiator()?.session_status(session_id).await
}

/// Available products, enriched with bundled catalog data.
///
/// Falls back to the bundled catalog when the backend cannot be reached.
pub async fn load_products() -> Vec<Product> {
    let url = format!("{}/api/products", origin());

    let fetched = match reqwest::get(&url).await {
        Ok(response) if response.status().is_success() => response.json::<Vec<Product>>().await.ok(),
        _ => None,
    };

    let products = fetched.unwrap_or_else(|| {
        leptos::logging::warn!("Product list unavailable; showing bundled catalog");
        catalog::products()
    });

    products
        .into_iter()
        .filter(|p| p.is_available)
        .map(catalog::enrich)
        .collect()
}
