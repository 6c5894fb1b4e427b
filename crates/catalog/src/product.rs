use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Product category.
///
/// Matching is case-insensitive; the stored casing is what responses carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a free-text filter.
    pub fn matches(&self, filter: &str) -> bool {
        self.0.to_lowercase() == filter.to_lowercase()
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog record: id, name, price, category.
///
/// Constructed via [`Product::new`], which enforces the field invariants.
/// Immutable after construction; there is no write path in this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    category: Category,
}

impl Product {
    /// Build a validated product record.
    ///
    /// Rejects empty names and categories, and prices that are negative or
    /// not finite numbers.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category: Category,
    ) -> DomainResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if category.as_str().trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }

        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(
                "price must be a non-negative finite number",
            ));
        }

        Ok(Self {
            id,
            name,
            price,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new(
            ProductId::new(1),
            "Laptop",
            899.99,
            Category::new("electronics"),
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = Product::new(ProductId::new(1), "   ", 1.0, Category::new("books")).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_rejects_empty_category() {
        let err = Product::new(ProductId::new(1), "Book", 1.0, Category::new("")).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty category"),
        }
    }

    #[test]
    fn new_rejects_negative_price() {
        let err =
            Product::new(ProductId::new(1), "Book", -0.01, Category::new("books")).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn new_rejects_non_finite_price() {
        let err =
            Product::new(ProductId::new(1), "Book", f64::NAN, Category::new("books")).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for NaN price"),
        }
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let product = laptop();
        assert!(product.category().matches("electronics"));
        assert!(product.category().matches("ELECTRONICS"));
        assert!(product.category().matches("Electronics"));
        assert!(!product.category().matches("books"));
    }

    #[test]
    fn category_preserves_storage_casing() {
        let category = Category::new("Electronics");
        assert!(category.matches("electronics"));
        assert_eq!(category.as_str(), "Electronics");
    }

    #[test]
    fn product_serializes_to_wire_shape() {
        let value = serde_json::to_value(laptop()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Laptop",
                "price": 899.99,
                "category": "electronics",
            })
        );
    }
}
