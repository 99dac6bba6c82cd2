//! Role-specific dashboards and demo data fallback.

#![allow(clippy::unwrap_used)]

use recircle_dashboard::views::{FALLBACK_WARNING, Widget};
use recircle_integration_tests::{TestApp, spawn_backend, stub_backend, unreachable_backend};

async fn dashboard_body(app: &TestApp) -> String {
    let response = app.get("/dashboard").await;
    assert_eq!(response.status(), 200);
    response.text().await.unwrap()
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn test_partner_dashboard_falls_back_to_demo_data() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("ngo1", "test", "partner").await;

    let body = dashboard_body(&app).await;
    assert!(body.contains(FALLBACK_WARNING));
    // Demo leaderboard
    assert!(body.contains("Green Cycle"));
    // Every partner widget still renders
    for widget in [Widget::ItemListing, Widget::Leaderboard, Widget::Forecast] {
        assert!(body.contains(widget.title()), "missing {}", widget.title());
    }
}

#[tokio::test]
async fn test_admin_dashboard_falls_back_to_demo_data() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("admin", "admin123", "admin").await;

    let body = dashboard_body(&app).await;
    assert!(body.contains(FALLBACK_WARNING));
    assert!(body.contains(r#"id="admin-map""#));
    assert!(body.contains(r#"id="map-markers""#));
    // Demo pending partners
    assert!(body.contains("Eco Warriors"));
}

#[tokio::test]
async fn test_readiness_reports_unreachable_backend() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    assert_eq!(app.get("/health").await.status(), 200);
    assert_eq!(app.get("/health/ready").await.status(), 503);
}

// =============================================================================
// Live Data
// =============================================================================

#[tokio::test]
async fn test_partner_listing_from_backend() {
    let app = TestApp::spawn(spawn_backend(stub_backend()).await).await;
    app.login("ngo1", "test", "partner").await;

    let body = dashboard_body(&app).await;
    assert!(body.contains("Winter jackets"));
    assert!(body.contains("Canned soup"));
    assert!(body.contains(r#"hx-post="/items/1/claim""#));
    assert!(!body.contains(r#"hx-post="/items/2/claim""#));
}

#[tokio::test]
async fn test_readiness_with_backend() {
    let app = TestApp::spawn(spawn_backend(stub_backend()).await).await;
    assert_eq!(app.get("/health/ready").await.status(), 200);
}

// =============================================================================
// Layouts
// =============================================================================

#[tokio::test]
async fn test_customer_dashboard_shows_only_donation_form() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("donor1", "test", "customer").await;

    let body = dashboard_body(&app).await;
    assert!(body.contains(r#"id="donation-form""#));
    assert!(!body.contains(Widget::ItemListing.title()));
    assert!(!body.contains(r#"id="admin-map""#));
}

#[tokio::test]
async fn test_partner_dashboard_has_no_admin_widgets() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("ngo2", "test", "partner").await;

    let body = dashboard_body(&app).await;
    assert!(!body.contains(r#"id="admin-map""#));
    assert!(!body.contains(Widget::ApprovalPanel.title()));
}

#[tokio::test]
async fn test_dismissed_notification_stays_dismissed() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("ngo1", "test", "partner").await;

    let before = dashboard_body(&app).await;
    assert!(before.contains(r#"id="notification-1""#));

    let response = app.htmx_post("/notifications/1/dismiss", &[]).await;
    assert_eq!(response.status(), 200);

    let after = dashboard_body(&app).await;
    assert!(!after.contains(r#"id="notification-1""#));
    assert!(after.contains(r#"id="notification-2""#));
}

// =============================================================================
// Role Gating
// =============================================================================

#[tokio::test]
async fn test_role_gated_endpoints() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("donor1", "test", "customer").await;

    let claim = app
        .htmx_post(
            "/items/1/claim",
            &[
                ("category", "Clothing"),
                ("description", "Winter jackets"),
                ("location", "New York"),
                ("quantity", "12"),
            ],
        )
        .await;
    assert_eq!(claim.status(), 403);

    assert_eq!(app.get("/admin/trends").await.status(), 403);
    assert_eq!(app.htmx_post("/notifications/1/dismiss", &[]).await.status(), 403);
}

#[tokio::test]
async fn test_admin_trends_fragment() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("admin", "admin123", "admin").await;

    let response = app.get("/admin/trends").await;
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"id="trends""#));
    assert!(body.contains(r#"id="trends-data""#));
}
