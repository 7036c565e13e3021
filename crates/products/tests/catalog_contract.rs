use catalog_products::{AddProduct, Catalog, DomainError, Product, ProductId, UpdateProduct};
use serde_json::json;

/// Fresh catalog per test, with tracing installed once for the binary.
fn catalog() -> Catalog {
    let _ = catalog_observability::init();
    Catalog::new()
}

fn listed(catalog: &Catalog) -> serde_json::Value {
    serde_json::to_value(catalog.list()).unwrap()
}

fn first_id(catalog: &Catalog) -> ProductId {
    catalog.list()[0].id_typed()
}

mod adding_products {
    use super::*;

    #[test]
    fn adds_a_product() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        assert_eq!(listed(&catalog), json!([{ "id": 1, "name": "Apple", "price": 2.5 }]));
    }

    #[test]
    fn increments_the_id_by_one_per_product() {
        let mut catalog = catalog();
        catalog.reset();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        catalog.add(AddProduct::new("Banana", 1.5)).unwrap();
        assert_eq!(
            listed(&catalog),
            json!([
                { "id": 1, "name": "Apple", "price": 2.5 },
                { "id": 2, "name": "Banana", "price": 1.5 },
            ])
        );
    }

    #[test]
    fn requires_name_and_price() {
        let mut catalog = catalog();

        let err = catalog.add(AddProduct::default()).unwrap_err();
        assert_eq!(err.to_string(), "Name and price are required");

        let name_only: AddProduct = serde_json::from_value(json!({ "name": "Apple" })).unwrap();
        let err = catalog.add(name_only).unwrap_err();
        assert_eq!(err.to_string(), "Name and price are required");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_an_existing_product() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        let err = catalog.add(AddProduct::new("Apple", 2.5)).unwrap_err();
        assert_eq!(err.to_string(), "Product already exists");
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}

mod removing_products {
    use super::*;

    #[test]
    fn removes_a_product() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        let id = first_id(&catalog);
        catalog.remove(id).unwrap();
        assert_eq!(listed(&catalog), json!([]));
    }

    #[test]
    fn rejects_a_missing_product() {
        let mut catalog = catalog();
        let err = catalog.remove(ProductId::new(999)).unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn never_reissues_a_removed_id() {
        let mut catalog = catalog();
        let apple = catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        catalog.remove(apple.id_typed()).unwrap();
        let banana = catalog.add(AddProduct::new("Banana", 1.5)).unwrap();
        assert_eq!(banana.id_typed(), ProductId::new(2));
    }
}

mod getting_a_product {
    use super::*;

    #[test]
    fn gets_a_product_by_id() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        let id = first_id(&catalog);
        assert_eq!(
            catalog.get(id).unwrap(),
            &Product::new(ProductId::new(1), "Apple", 2.5)
        );
    }

    #[test]
    fn rejects_a_missing_product() {
        let catalog = catalog();
        let err = catalog.get(ProductId::new(999)).unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }
}

mod updating_products {
    use super::*;

    #[test]
    fn updates_a_product_by_id() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        let id = first_id(&catalog);
        catalog
            .update(UpdateProduct::new(id).name("Green Apple").price(3.0))
            .unwrap();
        assert_eq!(
            serde_json::to_value(catalog.get(id).unwrap()).unwrap(),
            json!({ "id": 1, "name": "Green Apple", "price": 3.0 })
        );
    }

    #[test]
    fn rejects_a_missing_product() {
        let mut catalog = catalog();
        let err = catalog
            .update(UpdateProduct::new(ProductId::new(999)).name("Apple").price(2.5))
            .unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn only_updates_the_price_when_no_name_is_given() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        let id = first_id(&catalog);
        catalog.update(UpdateProduct::new(id).price(3.0)).unwrap();
        assert_eq!(
            catalog.get(id).unwrap(),
            &Product::new(ProductId::new(1), "Apple", 3.0)
        );
    }

    #[test]
    fn only_updates_the_name_when_no_price_is_given() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        let id = first_id(&catalog);
        catalog.update(UpdateProduct::new(id).name("Green Apple")).unwrap();
        assert_eq!(
            catalog.get(id).unwrap(),
            &Product::new(ProductId::new(1), "Green Apple", 2.5)
        );
    }

    #[test]
    fn accepts_an_update_with_no_fields() {
        let mut catalog = catalog();
        catalog.add(AddProduct::new("Apple", 2.5)).unwrap();
        let id = first_id(&catalog);
        let payload: UpdateProduct = serde_json::from_value(json!({ "id": 1 })).unwrap();
        catalog.update(payload).unwrap();
        assert_eq!(
            catalog.get(id).unwrap(),
            &Product::new(ProductId::new(1), "Apple", 2.5)
        );
    }
}
