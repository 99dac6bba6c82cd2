//! Donation form submission and category suggestions.

#![allow(clippy::unwrap_used)]

use recircle_integration_tests::{
    DONATION_THANKS, TestApp, spawn_backend, stub_backend, unreachable_backend,
};

const JACKETS: [(&str, &str); 4] = [
    ("category", "Clothing"),
    ("description", "Two winter jackets"),
    ("location", "Boston"),
    ("quantity", "2"),
];

#[tokio::test]
async fn test_donation_success_resets_form() {
    let app = TestApp::spawn(spawn_backend(stub_backend()).await).await;
    app.login("donor1", "test", "customer").await;

    let response = app.htmx_post("/donate", &JACKETS).await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains(DONATION_THANKS));
    assert!(!body.contains("Two winter jackets"));
    // Fragment only
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_donation_without_htmx_renders_page() {
    let app = TestApp::spawn(spawn_backend(stub_backend()).await).await;
    app.login("donor1", "test", "customer").await;

    let response = app.post_form("/donate", &JACKETS).await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("<html"));
    assert!(body.contains(DONATION_THANKS));
}

#[tokio::test]
async fn test_donation_validation_keeps_input() {
    let app = TestApp::spawn(spawn_backend(stub_backend()).await).await;
    app.login("donor1", "test", "customer").await;

    let response = app
        .htmx_post(
            "/donate",
            &[
                ("category", "Clothing"),
                ("description", "Two winter jackets"),
                ("location", "Boston"),
                ("quantity", "0"),
            ],
        )
        .await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Quantity must be greater than 0"));
    assert!(body.contains("Two winter jackets"));
    assert!(!body.contains(DONATION_THANKS));
}

#[tokio::test]
async fn test_donation_blank_or_garbled_quantity_flags_field() {
    let app = TestApp::spawn(spawn_backend(stub_backend()).await).await;
    app.login("donor1", "test", "customer").await;

    for quantity in ["", "abc"] {
        let response = app
            .htmx_post(
                "/donate",
                &[
                    ("category", "Clothing"),
                    ("description", "wool coat"),
                    ("location", "Boston"),
                    ("quantity", quantity),
                ],
            )
            .await;
        assert_eq!(response.status(), 200, "quantity {quantity:?}");

        let body = response.text().await.unwrap();
        assert!(body.contains("Quantity must be greater than 0"));
        assert!(body.contains("wool coat"));
        assert!(body.contains(&format!(r#"name="quantity" type="number" min="1" value="{quantity}""#)));
        assert!(!body.contains(DONATION_THANKS));
    }
}

#[tokio::test]
async fn test_donation_with_backend_down_reports_failure() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("donor1", "test", "customer").await;

    let response = app.htmx_post("/donate", &JACKETS).await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Failed to submit donation"));
    assert!(body.contains("Two winter jackets"));
}

#[tokio::test]
async fn test_donate_page_is_customer_only() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("ngo1", "test", "partner").await;

    assert_eq!(app.get("/donate").await.status(), 403);
}

#[tokio::test]
async fn test_category_suggestion_falls_back_to_local_classifier() {
    let app = TestApp::spawn(unreachable_backend().await).await;
    app.login("donor1", "test", "customer").await;

    let response = app.get("/donate/suggest?description=old+laptop+charger").await;
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("Electronics"));

    let blank = app.get("/donate/suggest?description=").await;
    assert_eq!(blank.status(), 200);
    assert!(!blank.text().await.unwrap().contains("Suggested category"));
}
