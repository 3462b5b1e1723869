use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use chrono::Utc;
use rand::rngs::OsRng;
use tracing::{info, instrument};

use models::user::User;

use super::errors::AuthError;
use crate::store::Store;

/// Hash a password into a PHC string. Single entry point shared by
/// seeding and user upserts.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// Verify a username/password pair against the stored accounts.
///
/// Outcomes:
/// - unknown username, missing credential, or wrong password ->
///   `InvalidCredentials`
/// - matching pair but deactivated account -> `InvalidCredentials`
///   (deliberately indistinguishable)
/// - matching pair, active, but access expired -> `AccountExpired`
/// - otherwise the account profile, with no hash on it
///
/// # Examples
/// ```
/// use service::{auth, seed, store::Store};
/// let dir = std::env::temp_dir().join(format!("portal_doc_{}", uuid::Uuid::new_v4()));
/// tokio_test::block_on(async {
///     let store = Store::open(&dir).await.unwrap();
///     seed::ensure_seed(&store).await.unwrap();
///     let user = auth::authenticate(&store, "admin", "password123").await.unwrap();
///     assert_eq!(user.username, "admin");
///     let _ = tokio::fs::remove_dir_all(&dir).await;
/// });
/// ```
#[instrument(skip_all, fields(username = %username))]
pub async fn authenticate(
    store: &Store,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    let record = store
        .users
        .all()
        .await
        .into_iter()
        .find(|u| u.profile.username == username)
        .ok_or(AuthError::InvalidCredentials)?;

    let stored_hash = record.password_hash.as_deref().ok_or(AuthError::InvalidCredentials)?;
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
    if Argon2::default().verify_password(password.as_bytes(), &parsed).is_err() {
        return Err(AuthError::InvalidCredentials);
    }

    if !record.profile.is_active {
        return Err(AuthError::InvalidCredentials);
    }
    if let Some(expires_at) = record.profile.access_expires_at {
        if expires_at < Utc::now() {
            return Err(AuthError::AccountExpired);
        }
    }

    info!(user_id = %record.profile.id, "login verified");
    Ok(record.into_profile())
}
