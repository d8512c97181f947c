//! Catalog product types.
//!
//! [`Product`] is the read model served by the catalog API. [`ProductDraft`]
//! is the loosely-typed creation payload (JSON body or admin form) and
//! [`ProductDraft::validate`] turns it into a [`NewProduct`] ready for insertion.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::ProductId;
use super::price::MAX_PRICE;

/// A product in the catalog.
///
/// Text fields that were never provided are stored and served as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub category: String,
    /// Informational only. Cart operations never check or decrement it.
    pub stock: i64,
}

impl Product {
    /// The product image URL, or `None` when no image was provided.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        let image = self.image.trim();
        if image.is_empty() { None } else { Some(image) }
    }
}

/// Errors produced when validating a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductValidationError {
    /// Name is missing/blank or price is missing/zero.
    #[error("Name and price are required")]
    MissingRequired,
    /// Price is below zero.
    #[error("Price must not be negative")]
    NegativePrice,
    /// Price is above [`MAX_PRICE`].
    #[error("Price must not exceed {}", MAX_PRICE)]
    PriceTooLarge,
    /// Stock is below zero.
    #[error("Stock must not be negative")]
    NegativeStock,
}

/// Creation payload for a product, as submitted by a client.
///
/// Every field is optional at this stage; [`validate`](Self::validate) decides
/// what is acceptable. Price and stock are read leniently from JSON: numbers
/// and numeric strings are accepted, anything else counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub stock: Option<i64>,
}

/// A validated product ready to be inserted into the catalog store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub stock: i64,
}

impl ProductDraft {
    /// Validate the draft.
    ///
    /// Name and price are required: a blank name or a zero price count as
    /// missing. Optional text fields default to empty strings and stock to 0.
    ///
    /// # Errors
    ///
    /// Returns [`ProductValidationError::MissingRequired`] when name or price is
    /// missing, the `Negative*` variants when a numeric field is below zero, and
    /// [`ProductValidationError::PriceTooLarge`] above [`MAX_PRICE`].
    pub fn validate(self) -> Result<NewProduct, ProductValidationError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ProductValidationError::MissingRequired)?;
        let price = self
            .price
            .filter(|price| !price.is_zero())
            .ok_or(ProductValidationError::MissingRequired)?;

        if price.is_sign_negative() {
            return Err(ProductValidationError::NegativePrice);
        }
        if price > MAX_PRICE {
            return Err(ProductValidationError::PriceTooLarge);
        }

        let stock = self.stock.unwrap_or(0);
        if stock < 0 {
            return Err(ProductValidationError::NegativeStock);
        }

        Ok(NewProduct {
            name,
            description: self.description.unwrap_or_default(),
            price,
            image: self.image.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            stock,
        })
    }
}

/// Parse a decimal from user input, accepting plain and scientific notation.
#[must_use]
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => parse_decimal(&number.to_string()),
        Some(Value::String(text)) => parse_decimal(&text),
        _ => None,
    })
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
