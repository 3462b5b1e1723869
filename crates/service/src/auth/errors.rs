use thiserror::Error;

/// Business errors for the login workflow. An inactive account is folded
/// into `InvalidCredentials` on purpose; only expiry gets its own signal.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account access expired")]
    AccountExpired,
    #[error("hashing error: {0}")]
    Hash(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 1001,
            AuthError::AccountExpired => 1002,
            AuthError::Hash(_) => 1101,
        }
    }
}
