//! Billing Details
//!
//! Contact and address fields collected on the checkout form.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for BillingDetails {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: "India".into(),
        }
    }
}

impl BillingDetails {
    /// Every field is required; the email must at least look like one
    pub fn validate(&self) -> Result<()> {
        let required = [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ];

        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(CheckoutError::Validation(
                "Please fill in all required fields".into(),
            ));
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(CheckoutError::Validation(
                "Please enter a valid email address".into(),
            )),
        }
    }

    /// Single-line postal address
    pub fn billing_address(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street.trim(),
            self.city.trim(),
            self.state.trim(),
            self.postal_code.trim(),
            self.country.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BillingDetails {
        BillingDetails {
            full_name: "Asha Rao".into(),
            email: "asha@example.in".into(),
            phone: "+91 98765 43210".into(),
            street: "12 MG Road".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            postal_code: "400001".into(),
            ..BillingDetails::default()
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(filled().validate().is_ok());
        assert_eq!(
            filled().billing_address(),
            "12 MG Road, Mumbai, Maharashtra 400001, India"
        );
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut details = filled();
        details.city = "   ".into();

        let error = details.validate().unwrap_err();
        assert_eq!(error.user_message(), "Please fill in all required fields");
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["asha", "@example.in", "asha@localhost"] {
            let mut details = filled();
            details.email = email.into();
            assert!(details.validate().is_err(), "accepted {email:?}");
        }
    }
}
