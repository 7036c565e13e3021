use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{Aggregate, DomainError, DomainResult, ProductId};

use crate::catalog::Catalog;
use crate::product::{AddProduct, Product, UpdateProduct};

/// Cloneable, thread-safe handle to a single [`Catalog`].
///
/// One lock guards both the product list and the id sequence, so every
/// operation observes and mutates them together.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn reset(&self) -> DomainResult<()> {
        self.write()?.reset();
        Ok(())
    }

    pub fn add(&self, cmd: AddProduct) -> DomainResult<Product> {
        self.write()?.add(cmd)
    }

    pub fn remove(&self, id: ProductId) -> DomainResult<()> {
        self.write()?.remove(id)
    }

    pub fn list(&self) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.list().to_vec())
    }

    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        self.read()?.get(id).cloned()
    }

    pub fn update(&self, cmd: UpdateProduct) -> DomainResult<()> {
        self.write()?.update(cmd)
    }

    pub fn version(&self) -> DomainResult<u64> {
        Ok(self.read()?.version())
    }

    /// Point-in-time copy of the whole catalog.
    pub fn snapshot(&self) -> DomainResult<Catalog> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Catalog>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Catalog>> {
        self.inner
            .write()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))
    }
}
