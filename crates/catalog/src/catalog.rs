use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Category, Product};

/// The fixed, in-memory set of all product records for the process lifetime.
///
/// Built once at startup (see [`Catalog::seed`]) and never mutated, so it can
/// be shared freely across request handlers without locking. Lookup and
/// filtering are linear scans; the set is small and the storage order is the
/// order responses list products in.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a set of records, enforcing id uniqueness.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id() == product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id: {}",
                    product.id()
                )));
            }
        }

        Ok(Self { products })
    }

    /// The seed catalog served by this process.
    pub fn seed() -> DomainResult<Self> {
        Self::new(vec![
            Product::new(
                ProductId::new(1),
                "Laptop",
                899.99,
                Category::new("electronics"),
            )?,
            Product::new(ProductId::new(2), "Book", 14.99, Category::new("books"))?,
            Product::new(
                ProductId::new(3),
                "Desk",
                199.99,
                Category::new("furniture"),
            )?,
        ])
    }

    /// All records in storage order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a record by id (linear scan).
    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| *p.id() == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Records whose category matches the filter, case-insensitively, in
    /// storage order. An unmatched filter is an empty result, not an error.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category().matches(category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
