//! Authentication route handlers.
//!
//! Credentials are checked against the demo identity table; the resulting
//! session is persisted in the cookie session by the session store.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use recircle_core::Role;
use serde::Deserialize;
use tower_sessions::Session as CookieSession;
use tracing::instrument;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{CurrentSession, session_store};
use crate::services::{AuthError, DemoIdentityProvider, DemoLogin};

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub role: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub username: String,
    pub role: Role,
    pub roles: &'static [Role],
    pub demo_accounts: Vec<DemoLogin>,
}

impl LoginTemplate {
    fn new(error: Option<String>, username: String, role: Role) -> Self {
        Self {
            error,
            username,
            role,
            roles: &Role::ALL,
            demo_accounts: DemoIdentityProvider::accounts().collect(),
        }
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Display the login page, or skip it when already signed in.
pub async fn login_page(CurrentSession(session): CurrentSession) -> Response {
    if session.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    LoginTemplate::new(None, String::new(), Role::Partner).into_response()
}

/// Handle login form submission.
///
/// A mismatch re-renders the form with the entered username and role.
#[instrument(skip(cookie, form), fields(username = %form.username, role = %form.role))]
pub async fn login(cookie: CookieSession, Form(form): Form<LoginForm>) -> Result<Response> {
    let Ok(role) = form.role.parse::<Role>() else {
        return Ok(invalid_credentials(form.username, Role::Partner));
    };

    let store = session_store(cookie).await;
    match store.login(&form.username, &form.password, role).await {
        Ok(session) => {
            set_sentry_user(&session.id, &session.username);
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::info!("Login rejected");
            Ok(invalid_credentials(form.username, role))
        }
        Err(e) => Err(AppError::from(e)),
    }
}

fn invalid_credentials(username: String, role: Role) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        LoginTemplate::new(Some("Invalid credentials".to_string()), username, role),
    )
        .into_response()
}

/// Handle logout.
#[instrument(skip(cookie))]
pub async fn logout(cookie: CookieSession) -> Redirect {
    session_store(cookie).await.logout().await;
    clear_sentry_user();
    Redirect::to("/auth/login")
}
