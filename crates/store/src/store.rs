use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use storefront_core::Money;

use crate::order::{OrderError, OrderLine};
use crate::product::{Product, ProductId};

/// Owns the product catalog and applies order batches against it.
///
/// The catalog keeps insertion order for display. Stock only changes through
/// [`Store::order`], which commits a batch all-or-nothing: every line is
/// validated against the stock remaining after the earlier lines of the same
/// batch before any quantity is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Take ownership of the catalog as given, in order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Read-only catalog view, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Case-insensitive lookup by product name.
    ///
    /// Linear scan; fine at catalog sizes this store is built for.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_name(name))
    }

    /// Units on hand across the whole catalog.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(Product::quantity).sum()
    }

    /// Apply an order batch.
    ///
    /// On success every line's quantity has been deducted and the batch
    /// total, sum of (unit price x quantity), is returned. On failure no
    /// product has been touched. A product appearing on several lines is
    /// validated against the running remaining stock, not the original
    /// stock per line.
    pub fn order(&mut self, lines: &[OrderLine]) -> Result<Money, OrderError> {
        let mut pending: HashMap<ProductId, u64> = HashMap::new();
        let mut total = Money::ZERO;

        for line in lines {
            let product = self
                .product(line.product_id)
                .ok_or(OrderError::UnknownProduct {
                    product_id: line.product_id,
                })?;
            if line.quantity == 0 {
                return Err(OrderError::ZeroQuantity {
                    name: product.name().to_string(),
                });
            }

            let requested = pending.entry(line.product_id).or_insert(0);
            *requested += line.quantity;
            if *requested > product.quantity() {
                return Err(OrderError::InsufficientStock {
                    name: product.name().to_string(),
                    requested: *requested,
                    available: product.quantity(),
                });
            }

            total += product.price() * line.quantity;
        }

        // The whole batch fits; commit the per-product deductions.
        for (product_id, quantity) in pending {
            if let Some(product) = self.product_mut(product_id) {
                product.deduct(quantity);
            }
        }

        Ok(total)
    }

    fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id_typed() == id)
    }
}
