//! Integration test harness for the ReCircle dashboard.
//!
//! Each test spawns its own dashboard on an ephemeral port, pointed either at
//! a [`stub_backend`] or at an address nothing listens on, and drives it over
//! HTTP with a cookie-keeping client.
//!
//! ```rust,ignore
//! let app = TestApp::spawn(spawn_backend(stub_backend()).await).await;
//! app.login("ngo1", "test", "partner").await;
//! let body = app.get("/dashboard").await.text().await?;
//! ```

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::net::SocketAddr;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use recircle_dashboard::config::DashboardConfig;
use recircle_dashboard::state::AppState;
use serde_json::{Value, json};
use url::Url;

// =============================================================================
// Stub Backend
// =============================================================================

/// Item id the stub backend refuses to claim.
pub const TAKEN_ITEM_ID: i64 = 2;

/// Reason the stub backend gives for refusing a claim.
pub const TAKEN_DETAIL: &str = "Item already claimed";

/// Message the stub backend acknowledges donations with.
pub const DONATION_THANKS: &str = "Thanks for donating";

/// Reply from the stub backend's chatbot.
pub const BACKEND_CHAT_REPLY: &str = "Hello from the backend";

/// A backend answering listings, claims, donations and chat.
///
/// Every other endpoint is a 404, so those widgets show demo data.
pub fn stub_backend() -> Router {
    Router::new()
        .route(
            "/api/listings",
            get(|| async {
                Json(json!([
                    {
                        "id": 1,
                        "category": "Clothing",
                        "description": "Winter jackets",
                        "location": "New York",
                        "quantity": 12,
                        "status": "available"
                    },
                    {
                        "id": TAKEN_ITEM_ID,
                        "category": "Food",
                        "description": "Canned soup",
                        "location": "Boston",
                        "quantity": 40,
                        "status": "claimed"
                    }
                ]))
            }),
        )
        .route(
            "/api/categories",
            get(|| async { Json(json!(["Clothing", "Electronics", "Food", "Furniture"])) }),
        )
        .route(
            "/api/locations",
            get(|| async { Json(json!(["Boston", "New York"])) }),
        )
        .route("/api/claim", post(claim))
        .route(
            "/api/donations",
            post(|| async {
                Json(json!({ "success": true, "message": DONATION_THANKS, "donation_id": 42 }))
            }),
        )
        .route(
            "/api/chatbot",
            post(|| async { Json(json!({ "response": BACKEND_CHAT_REPLY })) }),
        )
}

async fn claim(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let item_id = body.get("item_id").and_then(Value::as_i64).unwrap_or_default();
    if item_id == TAKEN_ITEM_ID {
        return (StatusCode::CONFLICT, Json(json!({ "detail": TAKEN_DETAIL })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "item_id": item_id,
            "partner_id": body.get("partner_id").cloned().unwrap_or(Value::Null),
            "status": "claimed",
            "message": "Item claimed successfully"
        })),
    )
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_backend(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    Url::parse(&format!("http://{addr}")).expect("stub backend URL")
}

/// URL of a backend that refuses every connection.
pub async fn unreachable_backend() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("unreachable backend URL")
}

// =============================================================================
// Dashboard
// =============================================================================

/// A running dashboard and a client that keeps its session cookie.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Start a dashboard talking to `backend`.
    pub async fn spawn(backend: Url) -> Self {
        let config = DashboardConfig::with_backend(backend);
        let state = AppState::new(config).expect("create app state");
        let app = recircle_dashboard::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind dashboard");
        let addr = listener.local_addr().expect("dashboard address");
        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .ok();
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("build client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request")
    }

    /// POST `fields` form-encoded.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.send_form(path, fields, false).await
    }

    /// POST `fields` form-encoded as an HTMX request.
    pub async fn htmx_post(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.send_form(path, fields, true).await
    }

    async fn send_form(&self, path: &str, fields: &[(&str, &str)], htmx: bool) -> reqwest::Response {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let mut request = self
            .client
            .post(self.url(path))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body);
        if htmx {
            request = request.header("hx-request", "true");
        }
        request.send().await.expect("POST request")
    }

    /// Sign in through the login form.
    pub async fn login(&self, username: &str, password: &str, role: &str) -> reqwest::Response {
        self.post_form(
            "/auth/login",
            &[("username", username), ("password", password), ("role", role)],
        )
        .await
    }
}

/// `Location` header of a redirect response.
pub fn location(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
}
