//! Products domain module (event-sourced catalog).
//!
//! This crate contains the in-memory product catalog: the `Product` record,
//! the commands/events that drive it, and the `Catalog` aggregate that enforces
//! id and name rules. No IO, no storage.

pub mod catalog;
pub mod product;
pub mod shared;

pub use catalog::Catalog;
pub use product::{
    AddProduct, CatalogCommand, CatalogEvent, CatalogReset, Product, ProductRemoved,
    ProductUpdated, RemoveProduct, UpdateProduct,
};
pub use shared::SharedCatalog;

pub use catalog_core::{Aggregate, DomainError, DomainResult, ProductId};
