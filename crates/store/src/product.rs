use core::fmt;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, EntityId, Money};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new() -> Self {
        Self(EntityId::new())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog entry: a sellable product with a unit price and on-hand stock.
///
/// Name uniqueness is a [`crate::Store`]-level convention (case-insensitive);
/// construction does not enforce it. Stock only changes through the store's
/// order operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: u64,
}

impl Product {
    /// Create a product with a fresh id.
    pub fn new(name: impl Into<String>, price: Money, quantity: u64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id: ProductId::new(),
            name,
            price,
            quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Case-insensitive name match ("macbook air m2" matches "MacBook Air M2").
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Deduct stock. Callers validate availability first; `quantity` never
    /// exceeds the on-hand amount.
    pub(crate) fn deduct(&mut self, quantity: u64) {
        self.quantity -= quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} in stock)", self.name, self.price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        Product::new("MacBook Air M2", Money::from_dollars(1450), 100).unwrap()
    }

    #[test]
    fn new_product_keeps_name_price_and_quantity() {
        let product = test_product();
        assert_eq!(product.name(), "MacBook Air M2");
        assert_eq!(product.price(), Money::from_dollars(1450));
        assert_eq!(product.quantity(), 100);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Product::new("   ", Money::from_dollars(1), 1).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("name cannot be empty")),
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn name_matching_ignores_case() {
        let product = test_product();
        assert!(product.matches_name("macbook air m2"));
        assert!(product.matches_name("MACBOOK AIR M2"));
        assert!(!product.matches_name("macbook air"));
    }

    #[test]
    fn display_line_shows_name_price_and_stock() {
        assert_eq!(
            test_product().to_string(),
            "MacBook Air M2 ($1450.00, 100 in stock)"
        );
    }

    #[test]
    fn products_get_distinct_ids() {
        assert_ne!(test_product().id_typed(), test_product().id_typed());
    }

    #[test]
    fn entity_id_agrees_with_typed_accessor() {
        let product = test_product();
        assert_eq!(*Entity::id(&product), product.id_typed());
    }
}
