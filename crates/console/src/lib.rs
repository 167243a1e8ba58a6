//! Interactive storefront console.
//!
//! Pure IO glue over [`storefront_store::Store`]: a menu loop, an order
//! sub-dialogue and formatting. All business rules live in the store crate;
//! this crate only reads lines, resolves names and prints results.

pub mod repl;

pub use repl::Repl;

use storefront_core::{DomainResult, Money};
use storefront_store::Product;

/// The fixed catalog the console starts with.
pub fn demo_catalog() -> DomainResult<Vec<Product>> {
    Ok(vec![
        Product::new("MacBook Air M2", Money::from_dollars(1450), 100)?,
        Product::new("Bose QuietComfort Earbuds", Money::from_dollars(250), 500)?,
        Product::new("Google Pixel 7", Money::from_dollars(500), 250)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_the_expected_stock() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.iter().map(Product::quantity).sum::<u64>(), 850);
    }
}
