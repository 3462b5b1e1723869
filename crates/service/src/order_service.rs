use chrono::Utc;
use uuid::Uuid;

use models::{
    order::{self, OrderItem, OrderRequest, OrderStatus},
    product::{Product, StockStatus},
    user::User,
};

use crate::errors::ServiceError;
use crate::store::Store;

/// Every order request, most recently created first. Creation prepends,
/// so the stored order already satisfies this.
pub async fn list_orders(store: &Store) -> Vec<OrderRequest> {
    store.orders.all().await
}

/// The requester's own view of the list.
pub async fn list_orders_for_user(store: &Store, user_id: &str) -> Vec<OrderRequest> {
    store.orders.all().await.into_iter().filter(|o| o.user_id == user_id).collect()
}

/// Build a pending order request for one product line, freezing the
/// product name and the requester's quoted price at this moment. Later
/// price or tier changes never touch the snapshot.
pub fn quote_request(
    requester: &User,
    product: &Product,
    quantity: u32,
    notes: Option<String>,
) -> Result<OrderRequest, ServiceError> {
    order::validate_quantity(quantity)?;
    if product.stock_status == StockStatus::OutOfStock {
        return Err(ServiceError::Validation("product is out of stock".into()));
    }
    Ok(OrderRequest {
        id: Uuid::new_v4().to_string(),
        user_id: requester.id.clone(),
        user_full_name: requester.full_name.clone(),
        clinic_name: requester.clinic_name.clone(),
        items: vec![OrderItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price_at_request: requester.quoted_price(product.base_price),
        }],
        status: OrderStatus::Pending,
        created_at: Utc::now(),
        notes,
    })
}

/// Prepend a request so the newest sits at index 0. Ids are taken as
/// given; duplicates are not checked.
pub async fn create_order(store: &Store, order: OrderRequest) -> Result<(), ServiceError> {
    store
        .orders
        .update(move |orders| {
            orders.insert(0, order);
            Ok(())
        })
        .await
}

/// Overwrite the status field of one request. An unknown id is a
/// `NotFound` error, and only forward transitions (plus the cancellation
/// escape from pending) are accepted.
pub async fn update_order_status(
    store: &Store,
    id: &str,
    status: OrderStatus,
) -> Result<(), ServiceError> {
    store
        .orders
        .update(move |orders| {
            let order = orders
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| ServiceError::not_found("order"))?;
            if !order.status.can_transition_to(status) {
                return Err(ServiceError::Validation(format!(
                    "illegal status transition {:?} -> {:?}",
                    order.status, status
                )));
            }
            order.status = status;
            Ok(())
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service;
    use crate::test_support;
    use crate::user_service;

    async fn doctor_and_product(store: &Store) -> (User, Product) {
        let doctor = user_service::get_user(store, "user-1").await.expect("seeded doctor");
        let product = catalog_service::get_product(store, "p-1").await.expect("seeded product");
        (doctor, product)
    }

    #[tokio::test]
    async fn new_requests_land_at_index_zero() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;
        let (doctor, product) = doctor_and_product(&store).await;

        let first = quote_request(&doctor, &product, 1, None)?;
        create_order(&store, first.clone()).await?;
        let second = quote_request(&doctor, &product, 2, Some("Urgent".into()))?;
        create_order(&store, second.clone()).await?;

        let orders = list_orders(&store).await;
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, second.id);
        assert_eq!(orders[1].id, first.id);

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn quote_freezes_discounted_price_at_request_time() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;
        let (doctor, mut product) = doctor_and_product(&store).await;

        let order = quote_request(&doctor, &product, 3, None)?;
        // doctor is at tier 0.85: 150000 -> 127500
        assert_eq!(order.items[0].unit_price_at_request, 127500);
        create_order(&store, order.clone()).await?;

        // raising the list price afterwards must not move the snapshot
        product.base_price = 999999;
        catalog_service::upsert_product(&store, product).await?;
        let stored = &list_orders(&store).await[0];
        assert_eq!(stored.items[0].unit_price_at_request, 127500);
        assert_eq!(stored.items[0].product_name, "LuminaTox 100U");

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn quote_rejects_out_of_stock_and_zero_quantity() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;
        let (doctor, mut product) = doctor_and_product(&store).await;

        assert!(quote_request(&doctor, &product, 0, None).is_err());

        product.stock_status = StockStatus::OutOfStock;
        let res = quote_request(&doctor, &product, 1, None);
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn status_update_touches_only_the_target_order() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;
        let (doctor, product) = doctor_and_product(&store).await;

        let first = quote_request(&doctor, &product, 1, None)?;
        let second = quote_request(&doctor, &product, 2, None)?;
        create_order(&store, first.clone()).await?;
        create_order(&store, second.clone()).await?;

        update_order_status(&store, &first.id, OrderStatus::Approved).await?;
        let orders = list_orders(&store).await;
        let updated = orders.iter().find(|o| o.id == first.id).expect("target");
        let untouched = orders.iter().find(|o| o.id == second.id).expect("other");
        assert_eq!(updated.status, OrderStatus::Approved);
        assert_eq!(untouched.status, OrderStatus::Pending);
        assert_eq!(updated.items, first.items);

        update_order_status(&store, &first.id, OrderStatus::Shipped).await?;
        update_order_status(&store, &second.id, OrderStatus::Cancelled).await?;

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_signaled_not_swallowed() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let res = update_order_status(&store, "no-such-order", OrderStatus::Approved).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn illegal_transition_is_rejected_and_unchanged() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;
        let (doctor, product) = doctor_and_product(&store).await;

        let order = quote_request(&doctor, &product, 1, None)?;
        create_order(&store, order.clone()).await?;
        update_order_status(&store, &order.id, OrderStatus::Approved).await?;

        let res = update_order_status(&store, &order.id, OrderStatus::Cancelled).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert_eq!(list_orders(&store).await[0].status, OrderStatus::Approved);

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn per_user_listing_filters_other_clinics() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;
        let (doctor, product) = doctor_and_product(&store).await;
        let admin = user_service::get_user(&store, "admin-1").await.expect("seeded admin");

        create_order(&store, quote_request(&doctor, &product, 1, None)?).await?;
        create_order(&store, quote_request(&admin, &product, 1, None)?).await?;

        let mine = list_orders_for_user(&store, &doctor.id).await;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, "user-1");
        assert_eq!(list_orders(&store).await.len(), 2);

        test_support::cleanup(&dir).await;
        Ok(())
    }
}
