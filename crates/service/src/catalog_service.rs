use models::{brand, brand::Brand, product, product::Product};

use crate::errors::ServiceError;
use crate::store::Store;

/// List every brand.
pub async fn list_brands(store: &Store) -> Vec<Brand> {
    store.brands.all().await
}

/// Look up a single brand.
pub async fn get_brand(store: &Store, id: &str) -> Option<Brand> {
    store.brands.all().await.into_iter().find(|b| b.id == id)
}

/// Insert or replace a brand, matched by id.
pub async fn upsert_brand(store: &Store, incoming: Brand) -> Result<(), ServiceError> {
    brand::validate_name(&incoming.name)?;
    store
        .brands
        .update(move |brands| {
            if let Some(existing) = brands.iter_mut().find(|b| b.id == incoming.id) {
                *existing = incoming;
            } else {
                brands.push(incoming);
            }
            Ok(())
        })
        .await
}

/// Full catalog scan with an optional equality filter on the owning brand.
pub async fn list_products(store: &Store, brand_id: Option<&str>) -> Vec<Product> {
    let products = store.products.all().await;
    match brand_id {
        Some(id) => products.into_iter().filter(|p| p.brand_id == id).collect(),
        None => products,
    }
}

pub async fn get_product(store: &Store, id: &str) -> Option<Product> {
    store.products.all().await.into_iter().find(|p| p.id == id)
}

/// Insert or replace a product, matched by id.
pub async fn upsert_product(store: &Store, incoming: Product) -> Result<(), ServiceError> {
    product::validate_name(&incoming.name)?;
    product::validate_base_price(incoming.base_price)?;
    store
        .products
        .update(move |products| {
            if let Some(existing) = products.iter_mut().find(|p| p.id == incoming.id) {
                *existing = incoming;
            } else {
                products.push(incoming);
            }
            Ok(())
        })
        .await
}

/// Remove a product by filtering it out of the collection. The only hard
/// delete in the system; an unknown id is a no-op.
pub async fn delete_product(store: &Store, id: &str) -> Result<(), ServiceError> {
    store
        .products
        .update(|products| {
            products.retain(|p| p.id != id);
            Ok(())
        })
        .await
}
