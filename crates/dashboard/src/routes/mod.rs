//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Redirect to dashboard or login
//! GET  /health                        - Liveness check
//! GET  /health/ready                  - Readiness check (backend reachable)
//!
//! # Auth
//! GET  /auth/login                    - Login page
//! POST /auth/login                    - Login action (rate limited)
//! POST /auth/logout                   - Logout action
//!
//! # Dashboard
//! GET  /dashboard                     - Role-gated widget page
//!
//! # Donations (customer)
//! GET  /donate                        - Donation form page
//! POST /donate                        - Submit donation (form fragment for HTMX)
//! GET  /donate/suggest                - Category suggestion fragment
//!
//! # Items (partner)
//! POST /items/{id}/claim              - Claim item (returns item row fragment)
//! GET  /items/{id}/trace              - Item audit trail
//!
//! # Admin
//! GET  /admin/trends                  - Trends fragment (polled by the page)
//! POST /admin/partners/{id}/approve   - Approve partner (removes row)
//!
//! # Partner notifications
//! POST /notifications/{id}/dismiss    - Dismiss notification (removes it)
//!
//! # Chat
//! POST /chat                          - Chatbot reply fragment
//! ```

pub mod admin;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod donate;
pub mod items;
pub mod notifications;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::middleware::{CurrentSession, auth_rate_limiter};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(auth::login_page).merge(post(auth::login).layer(auth_rate_limiter())),
        )
        .route("/logout", post(auth::logout))
}

/// Create the donation routes router.
pub fn donate_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(donate::page).post(donate::submit))
        .route("/suggest", get(donate::suggest))
}

/// Create the item routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/claim", post(items::claim))
        .route("/{id}/trace", get(items::trace))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/trends", get(admin::trends))
        .route("/partners/{id}/approve", post(admin::approve))
}

/// Create all routes for the dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard::index))
        .route("/chat", post(chat::send))
        .route("/notifications/{id}/dismiss", post(notifications::dismiss))
        .nest("/auth", auth_routes())
        .nest("/donate", donate_routes())
        .nest("/items", item_routes())
        .nest("/admin", admin_routes())
}

/// Send signed-in users to their dashboard, everyone else to login.
async fn home(CurrentSession(session): CurrentSession) -> Redirect {
    if session.is_some() {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/auth/login")
    }
}
