//! Domain Models
//!
//! Core data types for the cart and the checkout payload.
//! All money is an integer count of the smallest currency unit; never use f64 for money!

use serde::{Deserialize, Serialize};

use crate::error::{CartError, Result};

/// Currency used when a product does not carry its own
pub const DEFAULT_CURRENCY: &str = "inr";

/// A line in the visitor's cart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier, unique within the cart
    pub product_id: String,

    /// Display name captured when the item was added
    pub product_name: String,

    /// Display description captured when the item was added
    pub product_description: String,

    /// Unit price in the smallest currency unit, stored as a decimal string
    #[serde(with = "integer_string")]
    pub price_in_cents: u64,

    /// Units of this product (always >= 1)
    pub quantity: u32,

    /// Currency code (e.g., "inr")
    pub currency: String,

    /// Optional product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CartItem {
    /// Exact `price_in_cents * quantity`
    pub fn line_total(&self) -> u128 {
        u128::from(self.price_in_cents) * u128::from(self.quantity)
    }
}

/// A cart line before it has a quantity; the input to `add_to_cart`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: String,
    pub product_name: String,
    pub product_description: String,
    pub price_in_cents: u64,
    pub currency: String,
    pub image_url: Option<String>,
}

impl NewCartItem {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        price_in_cents: u64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            product_description: String::new(),
            price_in_cents,
            currency: currency.into(),
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.product_description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Checkout payload for buying this product directly, without a cart
    pub fn to_shopping_item(&self, quantity: u64) -> ShoppingItem {
        ShoppingItem {
            product_name: self.product_name.clone(),
            product_description: self.product_description.clone(),
            price_in_cents: self.price_in_cents,
            quantity,
            currency: self.currency.clone(),
        }
    }

    pub(crate) fn into_cart_item(self, quantity: u32) -> CartItem {
        CartItem {
            product_id: self.product_id,
            product_name: self.product_name,
            product_description: self.product_description,
            price_in_cents: self.price_in_cents,
            quantity,
            currency: self.currency,
            image_url: self.image_url,
        }
    }
}

/// A cart line in the shape the backend expects when creating a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub product_name: String,
    pub product_description: String,
    #[serde(with = "integer_string")]
    pub price_in_cents: u64,
    #[serde(with = "integer_string")]
    pub quantity: u64,
    pub currency: String,
}

impl From<&CartItem> for ShoppingItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_name: item.product_name.clone(),
            product_description: item.product_description.clone(),
            price_in_cents: item.price_in_cents,
            quantity: u64::from(item.quantity),
            currency: item.currency.clone(),
        }
    }
}

/// Product categories offered by the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Computers,
    Accessories,
    Networking,
    Communication,
    Services,
}

impl ProductCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Computers => "Computers",
            ProductCategory::Accessories => "Accessories",
            ProductCategory::Networking => "Networking",
            ProductCategory::Communication => "Communication",
            ProductCategory::Services => "Services",
        }
    }
}

/// A product as served by the backend catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub is_available: bool,

    /// Price in the smallest currency unit; `None` means "contact for price"
    #[serde(default, with = "optional_integer_string")]
    pub price: Option<u64>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Convert into a cart line, rejecting products that cannot be purchased.
    pub fn to_cart_item(&self) -> Result<NewCartItem> {
        if !self.is_available {
            return Err(CartError::Validation(format!(
                "{} is currently unavailable",
                self.name
            )));
        }

        let price = self.price.ok_or_else(|| {
            CartError::Validation(format!(
                "{} has no price; please contact us for a quote",
                self.name
            ))
        })?;

        let mut item = NewCartItem::new(self.id.to_string(), &self.name, price, DEFAULT_CURRENCY)
            .with_description(&self.description);
        item.image_url = self.image_url.clone();
        Ok(item)
    }
}

/// Serde adapter for integers that must survive consumers limited to
/// 53-bit floats: written as a decimal string, read from a string or an integer.
pub(crate) mod integer_string {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text
                .trim()
                .parse::<u64>()
                .map_err(|e| de::Error::custom(format!("invalid integer {text:?}: {e}"))),
            Repr::Number(value) => Ok(value),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum Repr {
        Text(String),
        Number(u64),
    }
}

pub(crate) mod optional_integer_string {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::integer_string;

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => integer_string::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "integer_string")] u64);

        let value: Option<Wrapper> = Option::deserialize(deserializer)?;
        Ok(value.map(|Wrapper(v)| v))
    }
}
