//! Backend Integration
//!
//! The storefront backend is an opaque service; this is the slice of it the
//! checkout needs.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use cart_core::ShoppingItem;
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Backend client trait (Strategy pattern)
///
/// Implement this for each way of reaching the backend: HTTP, a canister
/// agent, a test double.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CheckoutBackend {
    /// Ask the backend for a hosted payment session covering `items`
    async fn create_checkout_session(
        &self,
        items: &[ShoppingItem],
        success_url: &str,
        cancel_url: &str,
    ) -> Result<SessionResponse>;

    /// Look up what happened to a payment session
    async fn session_status(&self, session_id: &str) -> Result<SessionStatus>;
}

/// Raw session reply from the backend, before the URL is checked
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub url: String,
}

impl SessionResponse {
    pub fn new(url: impl Into<String>) -> Self {
        Self { id: None, url: url.into() }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Outcome of a payment session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionStatus {
    Completed {
        response: String,
        #[serde(default, rename = "userPrincipal")]
        user_principal: Option<String>,
    },
    Failed {
        error: String,
    },
}

impl SessionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionStatus::Completed { .. })
    }
}

/// Decode a session reply.
///
/// The backend answers either with the session object or with a JSON string
/// that itself contains the session object.
pub fn parse_session_response(body: &str) -> Result<SessionResponse> {
    let invalid = |e: serde_json::Error| {
        CheckoutError::SessionCreation(format!("invalid session response: {e}"))
    };

    let value: serde_json::Value = serde_json::from_str(body).map_err(invalid)?;
    let value = match value {
        serde_json::Value::String(inner) => serde_json::from_str(&inner).map_err(invalid)?,
        other => other,
    };

    serde_json::from_value(value).map_err(invalid)
}
