use serde::{Deserialize, Serialize};

use solidkit_core::{DomainError, DomainResult, ValueObject};

/// A line item on an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Product {
    price: f64,
}

impl Product {
    /// Prices must be finite and non-negative.
    pub fn new(price: f64) -> DomainResult<Self> {
        if !price.is_finite() {
            return Err(DomainError::validation("product price must be finite"));
        }
        if price < 0.0 {
            return Err(DomainError::validation(format!(
                "product price must not be negative (got {price})"
            )));
        }
        Ok(Self { price })
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl ValueObject for Product {}

impl TryFrom<f64> for Product {
    type Error = DomainError;

    fn try_from(price: f64) -> Result<Self, Self::Error> {
        Self::new(price)
    }
}

impl From<Product> for f64 {
    fn from(product: Product) -> Self {
        product.price
    }
}
