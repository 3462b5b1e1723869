//! Service layer: the data access API, authentication, session handling,
//! and the authorization guard, all over an injected file-backed store.
//! - Separates business rules from persistence.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types per concern.

pub mod access;
pub mod auth;
pub mod catalog_service;
pub mod errors;
pub mod order_service;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;
pub mod user_service;

#[cfg(test)]
pub mod test_support;
