use catalog_core::{Aggregate, DomainError, DomainResult, Entity, IdSequence, ProductId};

use crate::product::{
    AddProduct, CatalogCommand, CatalogEvent, CatalogReset, Product, ProductRemoved,
    ProductUpdated, RemoveProduct, UpdateProduct,
};

const PRODUCT: &str = "Product";
const NAME_AND_PRICE_REQUIRED: &str = "Name and price are required";
const PRODUCT_EXISTS: &str = "Product already exists";
const ID_SEQUENCE_EXHAUSTED: &str = "id sequence exhausted";

/// Aggregate root: the in-memory product catalog.
///
/// Holds products in insertion order and the id sequence used to mint new
/// ids. Ids are never reused, even after removal; only `reset` rewinds the
/// sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    ids: IdSequence,
    version: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog by replaying recorded events.
    ///
    /// The log is trusted: events are applied without re-running the checks in
    /// `handle`, so it must come from this catalog's own `execute` output.
    /// Debug builds assert that replayed additions keep ids and names unique.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a CatalogEvent>) -> Self {
        let mut catalog = Self::new();
        for event in events {
            catalog.apply(event);
        }
        catalog
    }

    /// Clear all products and rewind the id sequence.
    pub fn reset(&mut self) {
        self.apply(&CatalogEvent::CatalogReset(CatalogReset));
        tracing::debug!(version = self.version, "catalog reset");
    }

    pub fn add(&mut self, cmd: AddProduct) -> DomainResult<Product> {
        let events = self.run(CatalogCommand::Add(cmd))?;
        events
            .into_iter()
            .find_map(|event| match event {
                CatalogEvent::ProductAdded(product) => Some(product),
                _ => None,
            })
            .ok_or_else(|| DomainError::invariant("add emitted no ProductAdded event"))
    }

    pub fn remove(&mut self, id: ProductId) -> DomainResult<()> {
        self.run(CatalogCommand::Remove(RemoveProduct { id }))?;
        Ok(())
    }

    /// Products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.has_id(&id))
            .ok_or(DomainError::not_found(PRODUCT))
    }

    /// Apply the provided overrides. A command with no overrides is a valid
    /// no-op as long as the product exists.
    pub fn update(&mut self, cmd: UpdateProduct) -> DomainResult<()> {
        self.run(CatalogCommand::Update(cmd))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The id the next successful `add` will assign.
    pub fn next_id(&self) -> DomainResult<ProductId> {
        self.ids
            .peek()
            .map(ProductId::from)
            .ok_or_else(|| DomainError::invariant(ID_SEQUENCE_EXHAUSTED))
    }

    fn run(&mut self, command: CatalogCommand) -> DomainResult<Vec<CatalogEvent>> {
        match self.execute(&command) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(
                        event_type = event.event_type(),
                        product_id = ?event.product_id(),
                        version = self.version,
                        "catalog event applied"
                    );
                }
                Ok(events)
            }
            Err(err) => {
                tracing::debug!(command = command.name(), error = %err, "catalog command rejected");
                Err(err)
            }
        }
    }

    fn ensure_exists(&self, id: ProductId) -> DomainResult<()> {
        self.get(id).map(|_| ())
    }

    fn handle_add(&self, cmd: &AddProduct) -> DomainResult<Vec<CatalogEvent>> {
        let (Some(name), Some(price)) = (cmd.name.as_ref(), cmd.price) else {
            return Err(DomainError::validation(NAME_AND_PRICE_REQUIRED));
        };

        // Exact, case-sensitive match against products currently present.
        if self.products.iter().any(|p| p.name() == name) {
            return Err(DomainError::conflict(PRODUCT_EXISTS));
        }

        Ok(vec![CatalogEvent::ProductAdded(Product::new(
            self.next_id()?,
            name.clone(),
            price,
        ))])
    }

    fn handle_remove(&self, cmd: &RemoveProduct) -> DomainResult<Vec<CatalogEvent>> {
        self.ensure_exists(cmd.id)?;
        Ok(vec![CatalogEvent::ProductRemoved(ProductRemoved {
            product_id: cmd.id,
        })])
    }

    fn handle_update(&self, cmd: &UpdateProduct) -> DomainResult<Vec<CatalogEvent>> {
        self.ensure_exists(cmd.id)?;

        // Name uniqueness is only enforced on creation.
        if cmd.is_noop() {
            return Ok(vec![]);
        }

        Ok(vec![CatalogEvent::ProductUpdated(ProductUpdated {
            product_id: cmd.id,
            name: cmd.name.clone(),
            price: cmd.price,
        })])
    }
}

impl Aggregate for Catalog {
    type Command = CatalogCommand;
    type Event = CatalogEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CatalogEvent::CatalogReset(_) => {
                self.products.clear();
                self.ids.reset();
            }
            CatalogEvent::ProductAdded(product) => {
                debug_assert!(
                    !self.products.iter().any(|p| p.has_id(product.id())),
                    "duplicate product id {} in event log",
                    product.id_typed()
                );
                debug_assert!(
                    !self.products.iter().any(|p| p.name() == product.name()),
                    "duplicate product name {:?} in event log",
                    product.name()
                );
                self.ids.observe(product.id_typed().get());
                self.products.push(product.clone());
            }
            CatalogEvent::ProductRemoved(e) => {
                self.products.retain(|p| !p.has_id(&e.product_id));
            }
            CatalogEvent::ProductUpdated(e) => {
                if let Some(product) = self.products.iter_mut().find(|p| p.has_id(&e.product_id)) {
                    if let Some(name) = &e.name {
                        product.set_name(name.clone());
                    }
                    if let Some(price) = e.price {
                        product.set_price(price);
                    }
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CatalogCommand::Reset => Ok(vec![CatalogEvent::CatalogReset(CatalogReset)]),
            CatalogCommand::Add(cmd) => self.handle_add(cmd),
            CatalogCommand::Remove(cmd) => self.handle_remove(cmd),
            CatalogCommand::Update(cmd) => self.handle_update(cmd),
        }
    }
}
