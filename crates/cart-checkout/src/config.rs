//! Checkout Configuration

/// Where the backend lives and where the payment page sends the visitor back to
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Backend base URL
    pub backend_url: String,

    /// Origin of the storefront itself
    pub origin: String,

    /// Path the payment page returns to after a successful payment
    pub success_path: String,

    /// Path the payment page returns to when the visitor cancels
    pub cancel_path: String,

    /// Request timeout in seconds (native targets only)
    pub timeout_secs: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".into(),
            origin: "http://localhost:3000".into(),
            success_path: "/payment-success".into(),
            cancel_path: "/payment-failure".into(),
            timeout_secs: 30,
        }
    }
}

impl CheckoutConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let backend_url = std::env::var("STOREFRONT_BACKEND_URL")
            .unwrap_or(defaults.backend_url);
        let origin = std::env::var("STOREFRONT_ORIGIN")
            .unwrap_or(defaults.origin);
        let timeout_secs = std::env::var("STOREFRONT_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Self {
            backend_url,
            origin,
            timeout_secs,
            ..Self::default()
        }
    }

    /// Same settings, served from a different origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Return URL after payment; the payment provider fills in the session id
    pub fn success_url(&self) -> String {
        format!(
            "{}{}?session_id={{CHECKOUT_SESSION_ID}}",
            self.origin.trim_end_matches('/'),
            self.success_path
        )
    }

    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), self.cancel_path)
    }
}
