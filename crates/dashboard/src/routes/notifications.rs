//! Partner notification handlers.

use axum::{extract::Path, http::StatusCode};
use recircle_core::Role;
use tower_sessions::Session as CookieSession;

use crate::error::Result;
use crate::middleware::RequireSession;
use crate::models::session::dismiss_notification;

/// Dismiss a notification for this browser.
///
/// Returns an empty body so the banner is swapped out.
pub async fn dismiss(
    guard: RequireSession,
    cookie: CookieSession,
    Path(id): Path<u32>,
) -> Result<StatusCode> {
    guard.require_role(Role::Partner)?;
    dismiss_notification(&cookie, id).await?;
    tracing::debug!(notification_id = id, "Notification dismissed");
    Ok(StatusCode::OK)
}
