//! # cart-checkout
//!
//! Checkout session orchestration for the storefront cart.
//!
//! ## Hosted Checkout
//!
//! **Flow:** Cart → one backend call → redirect to the hosted payment page → back to the store
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │    Cart     │────▶│   Backend   │────▶│  Hosted Payment │────▶│  /payment-      │
//! │  (checkout) │     │ (session)   │     │      Page       │     │  success|failure│
//! └─────────────┘     └─────────────┘     └─────────────────┘     └─────────────────┘
//! ```
//!
//! The store never sees card data. It only learns a session URL, navigates
//! there, and clears the cart when the visitor lands on the success page.
//!
//! Each checkout is a single attempt: no retries, no deduplication. Keeping
//! the trigger disabled while a request is pending is the caller's job.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cart_checkout::{CheckoutConfig, CheckoutInitiator, HttpBackend};
//!
//! let config = CheckoutConfig::from_env();
//! let initiator = CheckoutInitiator::new(HttpBackend::from_config(&config)?, config);
//!
//! let session = initiator.checkout_cart(&cart).await?;
//!
//! // Redirect visitor to: session.url
//! ```

mod backend;
mod billing;
mod checkout;
mod config;
mod error;
mod flow;

pub use backend::{CheckoutBackend, HttpBackend, SessionResponse, SessionStatus, parse_session_response};
pub use billing::BillingDetails;
pub use checkout::{CheckoutInitiator, CheckoutSession, validate_session_url};
pub use config::CheckoutConfig;
pub use error::{CheckoutError, Result};
pub use flow::{CheckoutPhase, Navigator, PurchaseFlow};

pub use reqwest::Url;
