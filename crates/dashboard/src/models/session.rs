//! Session-stored dashboard preferences.
//!
//! The signed-in [`Session`](recircle_core::Session) itself lives under
//! [`SESSION_STORAGE_KEY`](recircle_core::SESSION_STORAGE_KEY) and is managed
//! by the session store; this module holds everything else.

use tower_sessions::Session as CookieSession;

use crate::services::StorageError;

/// Session keys for dashboard state.
pub mod keys {
    /// Notification ids the partner has dismissed.
    pub const DISMISSED_NOTIFICATIONS: &str = "dismissed_notifications";
}

/// Notification ids dismissed in this browser.
///
/// Unreadable values are treated as none dismissed.
pub async fn dismissed_notifications(session: &CookieSession) -> Vec<u32> {
    session
        .get::<Vec<u32>>(keys::DISMISSED_NOTIFICATIONS)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read dismissed notifications");
            None
        })
        .unwrap_or_default()
}

/// Remember that notification `id` was dismissed.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn dismiss_notification(session: &CookieSession, id: u32) -> Result<(), StorageError> {
    let mut dismissed = dismissed_notifications(session).await;
    if !dismissed.contains(&id) {
        dismissed.push(id);
    }
    session
        .insert(keys::DISMISSED_NOTIFICATIONS, dismissed)
        .await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> CookieSession {
        CookieSession::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_nothing_dismissed_initially() {
        assert!(dismissed_notifications(&session()).await.is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_is_remembered_once() {
        let session = session();
        dismiss_notification(&session, 1).await.unwrap();
        dismiss_notification(&session, 1).await.unwrap();
        dismiss_notification(&session, 2).await.unwrap();
        assert_eq!(dismissed_notifications(&session).await, vec![1, 2]);
    }
}
