use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::ProductId;

/// One requested line in an order batch: a product and a quantity.
///
/// Order batches are ephemeral; they exist only for the duration of one
/// call to [`crate::Store::order`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Why an order batch was rejected.
///
/// Whenever one of these comes back, no stock has been deducted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The batch asks for more units than are on hand, counting earlier
    /// lines of the same batch against the same product. `requested` is the
    /// batch's running total for that product at the line that failed.
    #[error("insufficient stock for \"{name}\": requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u64,
        available: u64,
    },

    /// The line references a product the store does not own.
    #[error("product {product_id} is not in the catalog")]
    UnknownProduct { product_id: ProductId },

    /// Requested quantities must be positive.
    #[error("quantity for \"{name}\" must be positive")]
    ZeroQuantity { name: String },
}
