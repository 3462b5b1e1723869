use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

/// A portal account as seen by everything except the credential store.
///
/// The persisted JSON keeps the original camelCase field names so existing
/// data directories stay readable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    /// Pricing multiplier: 1.0 = list price, 0.9 = 10% discount.
    pub discount_tier: f64,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_expires_at: Option<DateTime<Utc>>,
}

impl User {
    /// Price quoted to this account for a product at the given list price.
    pub fn quoted_price(&self, base_price: i64) -> i64 {
        (base_price as f64 * self.discount_tier).round() as i64
    }
}

/// Storage shape of an account: the public profile plus the password hash.
/// Only the `users` collection and the authentication path ever see the
/// hash; every other read goes through [`UserRecord::into_profile`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(flatten)]
    pub profile: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl UserRecord {
    pub fn into_profile(self) -> User {
        self.profile
    }
}

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    if username.trim().is_empty() {
        return Err(ModelError::Validation("username required".into()));
    }
    if username.contains(char::is_whitespace) {
        return Err(ModelError::Validation("username must not contain whitespace".into()));
    }
    Ok(())
}

pub fn validate_full_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("full name required".into()));
    }
    Ok(())
}

pub fn validate_discount_tier(tier: f64) -> Result<(), ModelError> {
    if !(tier > 0.0 && tier <= 1.0) {
        return Err(ModelError::Validation("discount tier must be in (0, 1]".into()));
    }
    Ok(())
}
