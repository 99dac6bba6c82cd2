//! Session store.
//!
//! Holds the current [`Session`] for one browser and keeps it in step with
//! persistent storage under [`SESSION_STORAGE_KEY`]. Production storage is
//! the cookie-keyed `tower_sessions::Session`; tests use [`MemoryStorage`].
//!
//! ```rust,ignore
//! let store = SessionStore::restore(cookie_session, DemoIdentityProvider).await;
//! let session = store.login("ngo1", "test", Role::Partner).await?;
//! store.logout().await;
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use recircle_core::{Role, SESSION_STORAGE_KEY, Session};
use thiserror::Error;
use tokio::sync::watch;
use tower_sessions::Session as CookieSession;

use crate::services::auth::{AuthError, IdentityProvider};

/// Errors from the underlying session storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session backend error: {0}")]
    Backend(String),
}

impl From<tower_sessions::session::Error> for StorageError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// String key-value storage a session is persisted in.
pub trait SessionStorage: Send + Sync {
    fn read(&self, key: &str)
    -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    fn write(&self, key: &str, value: String)
    -> impl Future<Output = Result<(), StorageError>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl SessionStorage for CookieSession {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get::<String>(key).await?)
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StorageError> {
        Ok(self.insert(key, value).await?)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove::<String>(key).await?;
        Ok(())
    }
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, bypassing any store.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Store a raw value, bypassing any store.
    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.into());
    }
}

impl SessionStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Current session for one browser, backed by `S`.
pub struct SessionStore<S, P> {
    storage: S,
    provider: P,
    current: watch::Sender<Option<Session>>,
}

impl<S, P> SessionStore<S, P>
where
    S: SessionStorage,
    P: IdentityProvider,
{
    /// Build a store, reading any persisted session once.
    ///
    /// An unreadable value is removed and the store starts unauthenticated.
    /// A storage failure also yields an unauthenticated store. Never fails.
    pub async fn restore(storage: S, provider: P) -> Self {
        let session = match storage.read(SESSION_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable stored session");
                    if let Err(e) = storage.remove(SESSION_STORAGE_KEY).await {
                        tracing::warn!(error = %e, "Failed to remove unreadable session");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unavailable, continuing signed out");
                None
            }
        };

        let (current, _) = watch::channel(session);
        Self {
            storage,
            provider,
            current,
        }
    }

    /// Verify credentials and start a session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any mismatch (nothing is
    /// persisted), or `AuthError::Storage` if the session cannot be saved.
    pub async fn login(&self, username: &str, password: &str, role: Role) -> Result<Session, AuthError> {
        let identity = self.provider.verify(username, password, role).await?;
        let session = Session::for_identity(identity);

        let raw = serde_json::to_string(&session)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.storage.write(SESSION_STORAGE_KEY, raw).await?;

        tracing::info!(user_id = %session.id, role = %session.role, "Signed in");
        self.current.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// End the session. Safe to call when already signed out.
    ///
    /// Storage failures are logged; the in-memory session is always cleared.
    pub async fn logout(&self) {
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY).await {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
        let previous = self.current.send_replace(None);
        if let Some(session) = previous {
            tracing::info!(user_id = %session.id, "Signed out");
        }
    }

    /// The current session, if signed in.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    /// Watch for login and logout.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }
}
