//! HTTP Backend
//!
//! Talks to the storefront backend's JSON API.

use async_trait::async_trait;
use cart_core::ShoppingItem;
use reqwest::Url;
use serde::Serialize;

use super::{CheckoutBackend, SessionResponse, SessionStatus, parse_session_response};
use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, Result};

/// Backend client over HTTP
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionRequest<'a> {
    items: &'a [ShoppingItem],
    success_url: &'a str,
    cancel_url: &'a str,
}

impl HttpBackend {
    /// Create a new backend client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from configuration
    pub fn from_config(config: &CheckoutConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| CheckoutError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `{base}/api/checkout/{id}/status`, with the id confined to one path segment
    fn status_url(&self, session_id: &str) -> Result<Url> {
        if matches!(session_id, "" | "." | "..") {
            return Err(CheckoutError::Validation(format!(
                "invalid checkout session id {session_id:?}"
            )));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| CheckoutError::Config(format!("invalid backend url {:?}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| CheckoutError::Config(format!("backend url {:?} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "checkout", session_id, "status"]);
        Ok(url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CheckoutBackend for HttpBackend {
    async fn create_checkout_session(
        &self,
        items: &[ShoppingItem],
        success_url: &str,
        cancel_url: &str,
    ) -> Result<SessionResponse> {
        let body = CreateSessionRequest {
            items,
            success_url,
            cancel_url,
        };

        let response = self
            .client
            .post(self.endpoint("/api/checkout"))
            .json(&body)
            .send()
            .await
            .map_err(|e| CheckoutError::SessionCreation(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CheckoutError::SessionCreation(e.to_string()))?;

        if !status.is_success() {
            return Err(CheckoutError::SessionCreation(format!(
                "backend returned {status}: {text}"
            )));
        }

        parse_session_response(&text)
    }

    async fn session_status(&self, session_id: &str) -> Result<SessionStatus> {
        let response = self
            .client
            .get(self.status_url(session_id)?)
            .send()
            .await
            .map_err(|e| CheckoutError::SessionCreation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckoutError::SessionCreation(format!(
                "status lookup returned {status}"
            )));
        }

        response
            .json::<SessionStatus>()
            .await
            .map_err(|e| CheckoutError::SessionCreation(format!("invalid status response: {e}")))
    }
}
