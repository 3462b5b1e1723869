use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use models::user::User;

use crate::errors::ServiceError;
use crate::store::Store;

/// What actually persists between restarts: only the identity id. The
/// live account record is re-read on every check, so edits and
/// deactivations take effect immediately instead of at the next logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(String),
}

/// Two-state session machine with a persisted record, restored at process
/// start. There is exactly one active session per store instance.
pub struct SessionManager {
    store: Arc<Store>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// Restore from the persisted record; absent or malformed starts
    /// Anonymous.
    pub async fn restore(store: Arc<Store>) -> Arc<Self> {
        let state = match store.session.get().await {
            Some(record) => {
                debug!(user_id = %record.user_id, "restored persisted session");
                SessionState::Authenticated(record.user_id)
            }
            None => SessionState::Anonymous,
        };
        Arc::new(Self { store, state: RwLock::new(state) })
    }

    /// Transition to Authenticated and persist the id as given; the
    /// caller is expected to have authenticated it already.
    pub async fn login(&self, user_id: &str) -> Result<(), ServiceError> {
        self.store.session.set(SessionRecord { user_id: user_id.to_string() }).await?;
        let mut state = self.state.write().await;
        *state = SessionState::Authenticated(user_id.to_string());
        info!(%user_id, "session opened");
        Ok(())
    }

    /// Transition to Anonymous and erase the persisted record.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        self.store.session.clear().await?;
        let mut state = self.state.write().await;
        *state = SessionState::Anonymous;
        info!("session closed");
        Ok(())
    }

    pub async fn state(&self) -> SessionState {
        let state = self.state.read().await;
        state.clone()
    }

    /// The live account behind the session, redacted. Yields `None` when
    /// anonymous, or when the account has since been removed, deactivated,
    /// or has expired; the stale snapshot problem is closed by re-reading
    /// here on every check.
    pub async fn current_user(&self) -> Option<User> {
        let id = match self.state().await {
            SessionState::Authenticated(id) => id,
            SessionState::Anonymous => return None,
        };
        let record = self.store.users.all().await.into_iter().find(|u| u.profile.id == id)?;
        if !record.profile.is_active {
            return None;
        }
        if let Some(expires_at) = record.profile.access_expires_at {
            if expires_at < Utc::now() {
                return None;
            }
        }
        Some(record.into_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use crate::user_service;

    #[tokio::test]
    async fn login_persists_and_survives_restore() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let sessions = SessionManager::restore(Arc::clone(&store)).await;
        assert_eq!(sessions.state().await, SessionState::Anonymous);
        assert!(sessions.current_user().await.is_none());

        sessions.login("user-1").await?;
        assert_eq!(sessions.current_user().await.map(|u| u.username), Some("doctor".into()));

        // a fresh manager over the same store resumes the session
        let resumed = SessionManager::restore(Arc::clone(&store)).await;
        assert_eq!(resumed.state().await, SessionState::Authenticated("user-1".into()));

        resumed.logout().await?;
        let after_logout = SessionManager::restore(store).await;
        assert_eq!(after_logout.state().await, SessionState::Anonymous);

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn deactivation_locks_out_an_open_session() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let sessions = SessionManager::restore(Arc::clone(&store)).await;
        sessions.login("user-1").await?;
        assert!(sessions.current_user().await.is_some());

        let mut doctor = user_service::get_user(&store, "user-1").await.expect("doctor");
        doctor.is_active = false;
        user_service::upsert_user(&store, doctor, None).await?;

        // no logout happened, but the live re-read rejects the account
        assert!(sessions.current_user().await.is_none());

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn edits_to_the_account_are_visible_immediately() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let sessions = SessionManager::restore(Arc::clone(&store)).await;
        sessions.login("user-1").await?;

        let mut doctor = user_service::get_user(&store, "user-1").await.expect("doctor");
        doctor.discount_tier = 0.7;
        user_service::upsert_user(&store, doctor, None).await?;

        let live = sessions.current_user().await.expect("still active");
        assert_eq!(live.discount_tier, 0.7);

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn session_for_a_vanished_account_reads_as_anonymous_user() -> Result<(), anyhow::Error> {
        let (store, dir) = test_support::open_seeded().await?;

        let sessions = SessionManager::restore(Arc::clone(&store)).await;
        sessions.login("ghost-1").await?;
        assert_eq!(sessions.state().await, SessionState::Authenticated("ghost-1".into()));
        assert!(sessions.current_user().await.is_none());

        test_support::cleanup(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_session_file_starts_anonymous() -> Result<(), anyhow::Error> {
        let dir = test_support::temp_data_dir("session_bad");
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join("session.json"), b"not json").await?;

        let store = Store::open(&dir).await?;
        let sessions = SessionManager::restore(store).await;
        assert_eq!(sessions.state().await, SessionState::Anonymous);

        test_support::cleanup(&dir).await;
        Ok(())
    }
}
