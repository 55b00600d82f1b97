//! Checkout Error Types

use cart_core::CartError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout-related errors
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Backend rejected the request or returned no usable URL
    #[error("Checkout session could not be created: {0}")]
    SessionCreation(String),

    /// Checkout attempted with nothing in the cart
    #[error("Your cart is empty")]
    EmptyCart,

    /// Local input rejected before any backend call
    #[error("{0}")]
    Validation(String),

    /// Purchase attempted without a signed-in identity
    #[error("Please log in to complete your purchase")]
    NotSignedIn,

    /// Handing the visitor off to the payment page failed
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Cart(CartError),
}

impl From<CartError> for CheckoutError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::Validation(message) => CheckoutError::Validation(message),
            other => CheckoutError::Cart(other),
        }
    }
}

impl CheckoutError {
    /// Check if the visitor can simply try again
    pub fn is_retryable(&self) -> bool {
        matches!(self, CheckoutError::SessionCreation(_) | CheckoutError::Navigation(_))
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            CheckoutError::SessionCreation(_) => "Failed to initiate checkout. Please try again.",
            CheckoutError::EmptyCart => "Your cart is empty",
            CheckoutError::Validation(message) => message,
            CheckoutError::NotSignedIn => "Please log in to complete your purchase",
            CheckoutError::Navigation(_) => "Could not open the payment page. Please try again.",
            _ => "An error occurred processing your request.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_validation_becomes_checkout_validation() {
        let error = CheckoutError::from(CartError::Validation("no price".into()));
        assert!(matches!(error, CheckoutError::Validation(ref m) if m == "no price"));
        assert_eq!(error.user_message(), "no price");
    }

    #[test]
    fn test_only_session_failures_are_retryable() {
        assert!(CheckoutError::SessionCreation("boom".into()).is_retryable());
        assert!(!CheckoutError::EmptyCart.is_retryable());
        assert!(!CheckoutError::Validation("x".into()).is_retryable());
    }
}
