use tracing::info;

use models::{
    brand::Brand,
    product::{Product, StockStatus},
    user::{Role, User, UserRecord},
};

use crate::auth;
use crate::errors::ServiceError;
use crate::store::Store;

/// Default password for the seeded accounts; hashed at seed time.
const SEED_PASSWORD: &str = "password123";

/// Populate first-run fixtures. Each collection is seeded independently
/// and only when empty, so an existing data directory is never touched.
/// Orders always start empty.
pub async fn ensure_seed(store: &Store) -> Result<(), ServiceError> {
    if store.users.is_empty().await {
        let hash = auth::hash_password(SEED_PASSWORD)
            .map_err(|e| ServiceError::Hash(e.to_string()))?;
        store.users.replace(seed_users(&hash)).await?;
        info!("seeded default accounts");
    }
    if store.brands.is_empty().await {
        store.brands.replace(seed_brands()).await?;
        info!("seeded brand catalog");
    }
    if store.products.is_empty().await {
        store.products.replace(seed_products()).await?;
        info!("seeded product catalog");
    }
    Ok(())
}

fn seed_users(password_hash: &str) -> Vec<UserRecord> {
    vec![
        UserRecord {
            profile: User {
                id: "admin-1".into(),
                username: "admin".into(),
                role: Role::Admin,
                full_name: "System Administrator".into(),
                clinic_name: None,
                discount_tier: 1.0,
                is_active: true,
                access_expires_at: None,
            },
            password_hash: Some(password_hash.to_string()),
        },
        UserRecord {
            profile: User {
                id: "user-1".into(),
                username: "doctor".into(),
                role: Role::User,
                full_name: "Dr. Sarah Smith".into(),
                clinic_name: Some("Elite Aesthetics".into()),
                discount_tier: 0.85,
                is_active: true,
                access_expires_at: None,
            },
            password_hash: Some(password_hash.to_string()),
        },
    ]
}

fn seed_brands() -> Vec<Brand> {
    vec![
        Brand {
            id: "b-1".into(),
            name: "LuminaTox".into(),
            description: "Premium Botulinum Toxin Type A for superior smoothing.".into(),
            origin_country: "South Korea".into(),
            certifications: vec!["FDA Approved".into(), "CE Certified".into()],
            image_url: "https://picsum.photos/id/10/800/600".into(),
        },
        Brand {
            id: "b-2".into(),
            name: "VelourFill".into(),
            description: "Hyaluronic Acid fillers with advanced cross-linking technology.".into(),
            origin_country: "France".into(),
            certifications: vec!["CE Certified".into(), "ISO 13485".into()],
            image_url: "https://picsum.photos/id/20/800/600".into(),
        },
    ]
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "p-1".into(),
            brand_id: "b-1".into(),
            name: "LuminaTox 100U".into(),
            specs: "100 Units / Vial".into(),
            description: "Standard vial for glabellar lines.".into(),
            usage_notes: None,
            base_price: 150000,
            image_url: "https://picsum.photos/id/30/400/400".into(),
            stock_status: StockStatus::InStock,
        },
        Product {
            id: "p-2".into(),
            brand_id: "b-1".into(),
            name: "LuminaTox 200U".into(),
            specs: "200 Units / Vial".into(),
            description: "Larger volume for body contouring applications.".into(),
            usage_notes: None,
            base_price: 280000,
            image_url: "https://picsum.photos/id/31/400/400".into(),
            stock_status: StockStatus::LowStock,
        },
        Product {
            id: "p-3".into(),
            brand_id: "b-2".into(),
            name: "VelourFill Deep".into(),
            specs: "2 x 1.1ml Syringes".into(),
            description: "Ideal for nasolabial folds and deep wrinkles.".into(),
            usage_notes: None,
            base_price: 120000,
            image_url: "https://picsum.photos/id/40/400/400".into(),
            stock_status: StockStatus::InStock,
        },
        Product {
            id: "p-4".into(),
            brand_id: "b-2".into(),
            name: "VelourFill Kiss".into(),
            specs: "1 x 1.1ml Syringe".into(),
            description: "Designed specifically for lip augmentation.".into(),
            usage_notes: None,
            base_price: 95000,
            image_url: "https://picsum.photos/id/41/400/400".into(),
            stock_status: StockStatus::InStock,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn seeding_is_idempotent_per_collection() -> Result<(), anyhow::Error> {
        let dir = test_support::temp_data_dir("seed");
        let store = Store::open(&dir).await?;

        ensure_seed(&store).await?;
        assert_eq!(store.users.all().await.len(), 2);
        assert_eq!(store.brands.all().await.len(), 2);
        assert_eq!(store.products.all().await.len(), 4);
        assert!(store.orders.all().await.is_empty());

        // second run must not duplicate anything
        ensure_seed(&store).await?;
        assert_eq!(store.users.all().await.len(), 2);
        assert_eq!(store.brands.all().await.len(), 2);
        assert_eq!(store.products.all().await.len(), 4);

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn seeding_leaves_existing_data_untouched() -> Result<(), anyhow::Error> {
        let dir = test_support::temp_data_dir("seed_keep");
        let store = Store::open(&dir).await?;
        ensure_seed(&store).await?;

        // wipe one collection; only that one gets reseeded on reopen
        store.brands.replace(vec![seed_brands().remove(1)]).await?;
        drop(store);
        let reopened = Store::open(&dir).await?;
        ensure_seed(&reopened).await?;
        assert_eq!(reopened.brands.all().await.len(), 1);
        assert_eq!(reopened.users.all().await.len(), 2);

        test_support::cleanup(&dir).await;
        Ok(())
    }
}
