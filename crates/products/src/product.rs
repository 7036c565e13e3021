use serde::{Deserialize, Serialize};

use catalog_core::{Entity, ProductId};

/// A catalog record.
///
/// Serializes flat: `{"id":1,"name":"Apple","price":2.5}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: AddProduct.
///
/// Both fields are required; they are `Option` so that a missing field
/// (including one absent from a JSON payload) reaches validation instead of
/// failing earlier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl AddProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }
}

/// Command: RemoveProduct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveProduct {
    pub id: ProductId,
}

/// Command: UpdateProduct.
///
/// `None` leaves the corresponding field unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl UpdateProduct {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            price: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// True when neither field would change.
    pub fn is_noop(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogCommand {
    Reset,
    Add(AddProduct),
    Remove(RemoveProduct),
    Update(UpdateProduct),
}

impl CatalogCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogCommand::Reset => "reset",
            CatalogCommand::Add(_) => "add",
            CatalogCommand::Remove(_) => "remove",
            CatalogCommand::Update(_) => "update",
        }
    }
}

/// Event: CatalogReset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReset;

/// Event: ProductRemoved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub product_id: ProductId,
}

/// Event: ProductUpdated. Only the provided fields are carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub product_id: ProductId,
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogEvent {
    CatalogReset(CatalogReset),
    ProductAdded(Product),
    ProductRemoved(ProductRemoved),
    ProductUpdated(ProductUpdated),
}

impl CatalogEvent {
    /// Stable event name.
    pub fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::CatalogReset(_) => "catalog.reset",
            CatalogEvent::ProductAdded(_) => "catalog.product.added",
            CatalogEvent::ProductRemoved(_) => "catalog.product.removed",
            CatalogEvent::ProductUpdated(_) => "catalog.product.updated",
        }
    }

    /// The product this event concerns, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CatalogEvent::CatalogReset(_) => None,
            CatalogEvent::ProductAdded(p) => Some(p.id_typed()),
            CatalogEvent::ProductRemoved(e) => Some(e.product_id),
            CatalogEvent::ProductUpdated(e) => Some(e.product_id),
        }
    }
}
