//! Catalog domain module.
//!
//! This crate contains the business rules for the product catalog,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The catalog is built once at startup and read-only afterwards.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Category, Product};
