use serde::{Deserialize, Serialize};
use uuid::Uuid;

use solidkit_core::{DomainError, DomainResult, Entity, ValueObject, impl_uuid_newtype};

use crate::product::Product;

/// Invoice identifier, generated once at creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl_uuid_newtype!(InvoiceId, "InvoiceId");

/// Percentage discount in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Discount(f64);

impl Discount {
    /// Out-of-range values are rejected rather than clamped.
    pub fn new(percent: f64) -> DomainResult<Self> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(DomainError::validation(format!(
                "discount must be between 0 and 100 (got {percent})"
            )));
        }
        // -0.0 would otherwise display as "-0".
        Ok(Self(if percent == 0.0 { 0.0 } else { percent }))
    }

    pub fn none() -> Self {
        Self(0.0)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Multiplier applied to the subtotal (`1 - d/100`).
    pub fn factor(&self) -> f64 {
        1.0 - self.0 / 100.0
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::none()
    }
}

impl ValueObject for Discount {}

impl TryFrom<f64> for Discount {
    type Error = DomainError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Discount> for f64 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl core::fmt::Display for Discount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: Invoice.
///
/// Immutable after construction. `total()` is derived on every call from the
/// current products and discount, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    id: InvoiceId,
    products: Vec<Product>,
    discount: Discount,
}

impl Invoice {
    pub fn new(products: Vec<Product>, discount: Discount) -> Self {
        Self::with_id(InvoiceId::new(), products, discount)
    }

    /// Build an invoice with a caller-chosen id (deterministic tests, replays).
    pub fn with_id(id: InvoiceId, products: Vec<Product>, discount: Discount) -> Self {
        Self {
            id,
            products,
            discount,
        }
    }

    /// Validate raw prices and discount in one step.
    pub fn from_prices(prices: &[f64], discount: f64) -> DomainResult<Self> {
        let products = prices
            .iter()
            .map(|&price| Product::new(price))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(products, Discount::new(discount)?))
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// Sum of product prices, in line order. Starts from +0.0 so an empty
    /// invoice totals `0`, not `-0`.
    pub fn subtotal(&self) -> f64 {
        self.products
            .iter()
            .fold(0.0, |acc, product| acc + product.price())
    }

    pub fn total(&self) -> f64 {
        self.subtotal() * self.discount.factor()
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_invoice() -> Invoice {
        Invoice::from_prices(&[10.0, 30.0, 100.0], 10.0).unwrap()
    }

    #[test]
    fn total_applies_percentage_discount() {
        let invoice = sample_invoice();
        assert_eq!(invoice.subtotal(), 140.0);
        assert_eq!(invoice.total(), 126.0);
    }

    #[test]
    fn empty_invoice_totals_positive_zero() {
        let invoice = Invoice::new(Vec::new(), Discount::none());
        assert_eq!(invoice.total(), 0.0);
        assert!(invoice.total().is_sign_positive());
        assert_eq!(invoice.total().to_string(), "0");
    }

    #[test]
    fn discount_bounds_are_inclusive() {
        assert_eq!(Discount::new(0.0).unwrap().percent(), 0.0);
        assert_eq!(Discount::new(100.0).unwrap().percent(), 100.0);
        assert_eq!(Discount::new(100.0).unwrap().factor(), 0.0);
    }

    #[test]
    fn negative_zero_discount_is_normalized() {
        let discount = Discount::new(-0.0).unwrap();
        assert!(discount.percent().is_sign_positive());
        assert_eq!(discount.to_string(), "0");
        assert_eq!(discount, Discount::none());
    }

    #[test]
    fn full_discount_zeroes_total() {
        let invoice = Invoice::from_prices(&[5.0, 7.0], 100.0).unwrap();
        assert_eq!(invoice.total(), 0.0);
    }

    #[test]
    fn discount_out_of_range_is_rejected() {
        for bad in [-0.5, 100.01, f64::NAN] {
            match Discount::new(bad) {
                Err(DomainError::Validation(msg)) if msg.contains("between 0 and 100") => {}
                other => panic!("Expected Validation error for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_price_fails_whole_invoice() {
        let err = Invoice::from_prices(&[10.0, -2.0], 0.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn each_invoice_gets_its_own_id() {
        let a = sample_invoice();
        let b = sample_invoice();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn with_id_keeps_the_given_id() {
        let id = InvoiceId::new();
        let invoice = Invoice::with_id(id, vec![Product::new(1.0).unwrap()], Discount::none());
        assert_eq!(invoice.id_typed(), id);
        assert_eq!(*invoice.id(), id);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: total == sum(prices) * (1 - d/100), exactly.
            #[test]
            fn total_matches_formula(
                prices in prop::collection::vec(0.0f64..10_000.0, 0..20),
                discount in 0.0f64..=100.0
            ) {
                let invoice = Invoice::from_prices(&prices, discount).unwrap();

                let mut sum = 0.0;
                for price in &prices {
                    sum += price;
                }
                let expected = sum * (1.0 - discount / 100.0);

                prop_assert_eq!(invoice.total(), expected);
            }

            /// Property: total never exceeds the subtotal and is never negative.
            #[test]
            fn total_is_bounded_by_subtotal(
                prices in prop::collection::vec(0.0f64..10_000.0, 1..20),
                discount in 0.0f64..=100.0
            ) {
                let invoice = Invoice::from_prices(&prices, discount).unwrap();
                prop_assert!(invoice.total() >= 0.0);
                prop_assert!(invoice.total() <= invoice.subtotal());
            }
        }
    }
}
