//! Checkout Session Initiator
//!
//! Turns a cart, or a single "buy now" product, into one backend request for
//! a hosted payment session.

use cart_core::{CartStorage, CartStore, Product, ShoppingItem};
use reqwest::Url;

use crate::backend::{CheckoutBackend, SessionStatus};
use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, Result};

/// Checkout session initiator
#[derive(Debug)]
pub struct CheckoutInitiator<B> {
    backend: B,
    config: CheckoutConfig,
}

/// A payment session the visitor can be sent to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Backend session ID, when the backend reports one
    pub id: Option<String>,

    /// Hosted payment page
    pub url: Url,
}

impl<B: CheckoutBackend> CheckoutInitiator<B> {
    pub fn new(backend: B, config: CheckoutConfig) -> Self {
        Self { backend, config }
    }

    /// Create a hosted payment session for `items`.
    ///
    /// Makes exactly one backend call. Callers check that `items` is not
    /// empty; no retry happens here and repeated calls create separate
    /// sessions.
    pub async fn create_checkout_session(&self, items: &[ShoppingItem]) -> Result<CheckoutSession> {
        tracing::info!(lines = items.len(), "Creating checkout session");

        let response = self
            .backend
            .create_checkout_session(items, &self.config.success_url(), &self.config.cancel_url())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Checkout session request failed");
                match e {
                    CheckoutError::SessionCreation(_) => e,
                    other => CheckoutError::SessionCreation(other.to_string()),
                }
            })?;

        let url = validate_session_url(&response.url)?;

        tracing::info!(session_id = ?response.id, "Checkout session created");

        Ok(CheckoutSession {
            id: response.id,
            url,
        })
    }

    /// Check out everything in the cart. The cart itself is never modified.
    pub async fn checkout_cart<S: CartStorage>(&self, cart: &CartStore<S>) -> Result<CheckoutSession> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.create_checkout_session(&cart.shopping_items()).await
    }

    /// Buy one unit of a product without touching the cart
    pub async fn buy_now(&self, product: &Product) -> Result<CheckoutSession> {
        let item = product.to_cart_item()?;
        self.create_checkout_session(&[item.to_shopping_item(1)]).await
    }

    /// Look up the outcome of a payment session
    pub async fn session_status(&self, session_id: &str) -> Result<SessionStatus> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(CheckoutError::Validation("Missing checkout session id".into()));
        }
        self.backend.session_status(session_id).await
    }
}

/// A session URL is usable only if it is an absolute http(s) URL
pub fn validate_session_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CheckoutError::SessionCreation("Checkout session missing url".into()));
    }

    let url = Url::parse(raw)
        .map_err(|e| CheckoutError::SessionCreation(format!("invalid session url {raw:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(CheckoutError::SessionCreation(format!(
            "unsupported session url scheme {scheme:?}"
        ))),
    }
}
