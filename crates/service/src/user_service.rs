use models::user::{self, User, UserRecord};

use crate::auth;
use crate::errors::ServiceError;
use crate::store::Store;

/// List every account with the password hash stripped. This redaction is
/// the one security property the data access layer must uphold.
pub async fn list_users(store: &Store) -> Vec<User> {
    store.users.all().await.into_iter().map(UserRecord::into_profile).collect()
}

/// Look up a single account, redacted.
pub async fn get_user(store: &Store, id: &str) -> Option<User> {
    store
        .users
        .all()
        .await
        .into_iter()
        .find(|u| u.profile.id == id)
        .map(UserRecord::into_profile)
}

/// Insert or replace an account, matched by id, with merge semantics for
/// the credential: a `Some` password is hashed and replaces the stored
/// hash, `None` preserves whatever hash the record already has. All other
/// fields are overwritten wholesale.
pub async fn upsert_user(
    store: &Store,
    incoming: User,
    password: Option<String>,
) -> Result<(), ServiceError> {
    user::validate_username(&incoming.username)?;
    user::validate_full_name(&incoming.full_name)?;
    user::validate_discount_tier(incoming.discount_tier)?;

    let new_hash = match password.as_deref() {
        Some(p) => Some(auth::hash_password(p).map_err(|e| ServiceError::Hash(e.to_string()))?),
        None => None,
    };

    store
        .users
        .update(move |users| {
            if let Some(existing) = users.iter_mut().find(|u| u.profile.id == incoming.id) {
                let kept_hash = new_hash.or_else(|| existing.password_hash.take());
                *existing = UserRecord { profile: incoming, password_hash: kept_hash };
            } else {
                users.push(UserRecord { profile: incoming, password_hash: new_hash });
            }
            Ok(())
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use models::user::Role;

    fn clinic_account() -> User {
        User {
            id: "user-9".into(),
            username: "drlee".into(),
            role: Role::User,
            full_name: "Dr. Min Lee".into(),
            clinic_name: Some("Seoul Derm".into()),
            discount_tier: 0.9,
            is_active: true,
            access_expires_at: None,
        }
    }

    #[tokio::test]
    async fn listing_never_exposes_hashes() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let users = list_users(&store).await;
        assert_eq!(users.len(), 2);
        let as_json = serde_json::to_value(&users)?;
        for entry in as_json.as_array().expect("array") {
            assert!(entry.get("passwordHash").is_none());
        }
        // while the raw storage still carries them
        assert!(store.users.all().await.iter().all(|u| u.password_hash.is_some()));

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn empty_store_lists_no_users() -> Result<(), anyhow::Error> {
        let dir = test_support::temp_data_dir("users_empty");
        let store = crate::store::Store::open(&dir).await?;

        assert!(list_users(&store).await.is_empty());

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn upsert_without_password_preserves_stored_hash() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let before = store
            .users
            .all()
            .await
            .into_iter()
            .find(|u| u.profile.id == "user-1")
            .expect("seeded doctor");
        let original_hash = before.password_hash.clone().expect("hash present");

        let mut edited = before.profile.clone();
        edited.discount_tier = 0.8;
        edited.clinic_name = Some("Elite Aesthetics Gangnam".into());
        upsert_user(&store, edited, None).await?;

        let after = store
            .users
            .all()
            .await
            .into_iter()
            .find(|u| u.profile.id == "user-1")
            .expect("still there");
        assert_eq!(after.password_hash.as_deref(), Some(original_hash.as_str()));
        assert_eq!(after.profile.discount_tier, 0.8);

        // and the old password still works
        assert!(auth::authenticate(&store, "doctor", "password123").await.is_ok());

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn upsert_with_password_rotates_the_credential() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let doctor = get_user(&store, "user-1").await.expect("seeded doctor");
        upsert_user(&store, doctor, Some("new-secret-1".into())).await?;

        assert!(auth::authenticate(&store, "doctor", "password123").await.is_err());
        assert!(auth::authenticate(&store, "doctor", "new-secret-1").await.is_ok());

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn new_account_appends_and_can_log_in() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        upsert_user(&store, clinic_account(), Some("first-pass".into())).await?;
        assert_eq!(list_users(&store).await.len(), 3);
        let user = auth::authenticate(&store, "drlee", "first-pass").await?;
        assert_eq!(user.id, "user-9");

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_fields_are_rejected() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let mut bad = clinic_account();
        bad.discount_tier = 0.0;
        assert!(upsert_user(&store, bad, None).await.is_err());

        let mut bad = clinic_account();
        bad.username = "dr lee".into();
        assert!(upsert_user(&store, bad, None).await.is_err());

        test_support::cleanup(&dir).await;
        Ok(())
    }
}
