//! Sign-in, sign-out and session gating.

#![allow(clippy::unwrap_used)]

use recircle_integration_tests::{TestApp, location, unreachable_backend};

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_page_offers_every_role() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    let response = app.get("/auth/login").await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains(r#"value="customer""#));
    assert!(body.contains(r#"value="partner""#));
    assert!(body.contains(r#"value="admin""#));
    // Demo credentials listed
    assert!(body.contains("<code>donor1</code>"));
    assert!(body.contains("<code>admin123</code>"));
}

#[tokio::test]
async fn test_login_success_redirects_to_dashboard() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    let response = app.login("ngo1", "test", "partner").await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), Some("/dashboard"));

    let dashboard = app.get("/dashboard").await;
    assert_eq!(dashboard.status(), 200);
    assert!(dashboard.text().await.unwrap().contains("Community Aid"));
}

#[tokio::test]
async fn test_login_wrong_password_rerenders_form() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    let response = app.login("ngo1", "wrong", "partner").await;
    assert_eq!(response.status(), 401);

    let body = response.text().await.unwrap();
    assert!(body.contains("Invalid credentials"));
    assert!(body.contains(r#"value="ngo1""#));

    // Still signed out
    let dashboard = app.get("/dashboard").await;
    assert_eq!(location(&dashboard), Some("/auth/login"));
}

#[tokio::test]
async fn test_login_wrong_role_is_rejected() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    let response = app.login("ngo1", "test", "admin").await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_login_username_must_match_exactly() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    let response = app.login(" admin ", "admin123", "admin").await;
    assert_eq!(response.status(), 401);
    assert_eq!(location(&app.get("/dashboard").await), Some("/auth/login"));
}

#[tokio::test]
async fn test_login_page_redirects_when_signed_in() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("donor1", "test", "customer").await;

    let response = app.get("/auth/login").await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), Some("/dashboard"));
}

#[tokio::test]
async fn test_login_attempts_are_rate_limited() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    for _ in 0..5 {
        let response = app.login("ngo1", "wrong", "partner").await;
        assert_eq!(response.status(), 401);
    }

    let response = app.login("ngo1", "test", "partner").await;
    assert_eq!(response.status(), 429);

    // The form itself is not limited
    assert_eq!(app.get("/auth/login").await.status(), 200);
}

// =============================================================================
// Logout and Gating
// =============================================================================

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("admin", "admin123", "admin").await;
    assert_eq!(app.get("/dashboard").await.status(), 200);

    let response = app.post_form("/auth/logout", &[]).await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), Some("/auth/login"));

    let dashboard = app.get("/dashboard").await;
    assert_eq!(dashboard.status(), 303);
    assert_eq!(location(&dashboard), Some("/auth/login"));
}

#[tokio::test]
async fn test_home_redirects_by_session() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    let response = app.get("/").await;
    assert_eq!(location(&response), Some("/auth/login"));

    app.login("donor1", "test", "customer").await;
    let response = app.get("/").await;
    assert_eq!(location(&response), Some("/dashboard"));
}

#[tokio::test]
async fn test_htmx_request_without_session_gets_hx_redirect() {
    let app = TestApp::spawn(unreachable_backend().await).await;

    let response = app.htmx_post("/chat", &[("message", "hi")]).await;
    assert_eq!(response.status(), 401);
    assert_eq!(
        response.headers().get("hx-redirect").and_then(|v| v.to_str().ok()),
        Some("/auth/login")
    );
}
