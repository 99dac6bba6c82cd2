//! Authentication extractors.
//!
//! Every request restores its [`SessionStore`] from the cookie session; these
//! extractors expose the result to route handlers.

use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use recircle_core::{Role, Session};
use tower_sessions::Session as CookieSession;

use crate::error::AppError;
use crate::services::{DemoIdentityProvider, SessionStore};

/// Session store for one request.
pub type RequestSessionStore = SessionStore<CookieSession, DemoIdentityProvider>;

/// Restore the session store for a request.
pub async fn session_store(session: CookieSession) -> RequestSessionStore {
    SessionStore::restore(session, DemoIdentityProvider).await
}

/// Extractor that requires a signed-in session.
///
/// Page requests are redirected to the login page; HTMX fragment requests get
/// a 401 with an `HX-Redirect` header so the whole page navigates.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireSession(session): RequireSession) -> impl IntoResponse {
///     format!("Hello, {}!", session.name)
/// }
/// ```
pub struct RequireSession(pub Session);

impl RequireSession {
    /// Reject unless the session has `role`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` for any other role.
    pub fn require_role(&self, role: Role) -> Result<&Session, AppError> {
        if self.0.has_role(role) {
            Ok(&self.0)
        } else {
            tracing::debug!(user_id = %self.0.id, have = %self.0.role, need = %role, "Role check failed");
            Err(AppError::Forbidden(format!("{} access required", role.label())))
        }
    }
}

/// Error returned when a session is required but the user is signed out.
#[derive(Debug)]
pub enum AuthRejection {
    /// Redirect to login page (for page requests).
    RedirectToLogin,
    /// 401 with `HX-Redirect` (for HTMX fragment requests).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => {
                let mut response = StatusCode::UNAUTHORIZED.into_response();
                response
                    .headers_mut()
                    .insert("hx-redirect", HeaderValue::from_static("/auth/login"));
                response
            }
        }
    }
}

fn is_fragment_request(parts: &Parts) -> bool {
    parts.headers.contains_key("hx-request")
}

async fn restore_session(parts: &Parts) -> Option<Session> {
    let cookie = parts.extensions.get::<CookieSession>()?.clone();
    session_store(cookie).await.current()
}

impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        restore_session(parts).await.map(Self).ok_or_else(|| {
            if is_fragment_request(parts) {
                AuthRejection::Unauthorized
            } else {
                AuthRejection::RedirectToLogin
            }
        })
    }
}

/// Extractor that optionally gets the current session.
pub struct CurrentSession(pub Option<Session>);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(restore_session(parts).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recircle_core::{Identity, IdentityId};

    fn session(role: Role) -> Session {
        Session::for_identity(Identity {
            id: IdentityId::new(1),
            role,
            username: "ngo1".to_string(),
            name: "Community Aid".to_string(),
            location: "New York".to_string(),
            points: 150,
            status: "approved".to_string(),
        })
    }

    #[test]
    fn test_require_role_matches() {
        let guard = RequireSession(session(Role::Partner));
        assert!(guard.require_role(Role::Partner).is_ok());
    }

    #[test]
    fn test_require_role_forbidden() {
        let guard = RequireSession(session(Role::Partner));
        let err = guard.require_role(Role::Admin).err();
        assert!(matches!(err, Some(AppError::Forbidden(_))));
    }

    #[test]
    fn test_rejection_responses() {
        let redirect = AuthRejection::RedirectToLogin.into_response();
        assert_eq!(redirect.status(), StatusCode::SEE_OTHER);

        let fragment = AuthRejection::Unauthorized.into_response();
        assert_eq!(fragment.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            fragment.headers().get("hx-redirect").and_then(|v| v.to_str().ok()),
            Some("/auth/login")
        );
    }
}
