//! HTTP client for the ReCircle backend.

use std::sync::Arc;

use recircle_core::{Donation, Item, ItemId, PartnerId};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::ApiError;
use super::fallback;
use super::types::{
    AdminKpis, ApproveRequest, AuditEntry, Badge, CategorizeRequest, CategorySuggestion,
    ChatReply, ChatRequest, Challenge, ClaimAck, ClaimRequest, DonationAck, DonationLocation,
    ForecastEntry, ImpactSummary, MapPoint, Partner, PartnerInsights, TraceEvent, TrendPoint,
};
use crate::config::ApiConfig;
use crate::resource::RemoteResource;

// =============================================================================
// Endpoint
// =============================================================================

/// A single backend request: method, path, query and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl Endpoint {
    /// `GET` request for `path` (e.g. `/api/partners`).
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `POST` request for `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Parse` if the body cannot be serialized.
    pub fn post(path: impl Into<String>, body: &impl serde::Serialize) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// Add a query parameter. Blank values are skipped.
    #[must_use]
    pub fn query(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Resolve against the backend base URL.
    fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();
        let path = format!("{}{}", base.path().trim_end_matches('/'), self.path);
        url.set_path(&path);
        url.set_query(None);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        if url.cannot_be_a_base() {
            return Err(ApiError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(url)
    }
}

/// Optional filters for the item listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ListingFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the ReCircle REST backend.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("recircle-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
                token: config.token.clone(),
            }),
        })
    }

    /// Perform one request and parse the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failure, `ApiError::Status` on a
    /// non-2xx response, and `ApiError::Parse` if the body does not match `T`.
    #[instrument(skip(self, endpoint), fields(method = %endpoint.method, path = %endpoint.path))]
    pub async fn send<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let url = endpoint.url(&self.inner.base_url)?;

        let mut request = self.inner.client.request(endpoint.method.clone(), url);
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Backend returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_detail(&response_text)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string()),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            ApiError::Parse(e)
        })
    }

    /// Load read-only data, substituting `fallback` on any failure.
    ///
    /// Never fails; check [`RemoteResource::is_fallback`] for the outcome.
    pub async fn load<T: DeserializeOwned>(
        &self,
        name: &str,
        endpoint: Endpoint,
        fallback: T,
    ) -> RemoteResource<T> {
        let resource = RemoteResource::idle().loading();
        let result = self.send(&endpoint).await;
        resource.resolve(name, result, fallback)
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// Item listing, optionally filtered.
    pub async fn listings(&self, filter: &ListingFilter) -> RemoteResource<Vec<Item>> {
        let endpoint = Endpoint::get("/api/listings")
            .query("category", filter.category.as_deref())
            .query("location", filter.location.as_deref());
        self.load("listings", endpoint, Vec::new()).await
    }

    /// Category filter options.
    pub async fn categories(&self) -> RemoteResource<Vec<String>> {
        self.load("categories", Endpoint::get("/api/categories"), fallback::categories())
            .await
    }

    /// Location filter options.
    pub async fn locations(&self) -> RemoteResource<Vec<String>> {
        self.load("locations", Endpoint::get("/api/locations"), Vec::new())
            .await
    }

    /// Claim an item for a partner.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error; the item is left unchanged.
    #[instrument(skip(self))]
    pub async fn claim(&self, item_id: ItemId, partner_id: PartnerId) -> Result<ClaimAck, ApiError> {
        let endpoint = Endpoint::post(
            "/api/claim",
            &ClaimRequest {
                item_id,
                partner_id,
            },
        )?;
        self.send(&endpoint).await
    }

    /// Audit trail for an item.
    pub async fn trace(&self, item_id: ItemId) -> RemoteResource<Vec<TraceEvent>> {
        self.load(
            "trace",
            Endpoint::get(format!("/api/blockchain/{item_id}")),
            fallback::trace(item_id),
        )
        .await
    }

    // =========================================================================
    // Partner Widgets
    // =========================================================================

    /// Partners ranked by points.
    pub async fn leaderboard(&self) -> RemoteResource<Vec<Partner>> {
        self.load("leaderboard", Endpoint::get("/api/partners"), fallback::leaderboard())
            .await
    }

    pub async fn impact(&self, partner_id: PartnerId) -> RemoteResource<ImpactSummary> {
        self.load(
            "impact",
            Endpoint::get(format!("/api/impact/{partner_id}")),
            fallback::impact(partner_id),
        )
        .await
    }

    pub async fn insights(&self, partner_id: PartnerId) -> RemoteResource<PartnerInsights> {
        self.load(
            "insights",
            Endpoint::get(format!("/api/partner-insights/{partner_id}")),
            fallback::insights(),
        )
        .await
    }

    pub async fn forecast(&self, partner_id: PartnerId) -> RemoteResource<Vec<ForecastEntry>> {
        self.load(
            "forecast",
            Endpoint::get(format!("/api/forecast/{partner_id}")),
            fallback::forecast(),
        )
        .await
    }

    pub async fn badges(&self, partner_id: PartnerId) -> RemoteResource<Vec<Badge>> {
        self.load(
            "badges",
            Endpoint::get(format!("/api/badges/{partner_id}")),
            fallback::badges(),
        )
        .await
    }

    pub async fn challenges(&self, partner_id: PartnerId) -> RemoteResource<Vec<Challenge>> {
        self.load(
            "challenges",
            Endpoint::get(format!("/api/badges/{partner_id}/challenges")),
            fallback::challenges(),
        )
        .await
    }

    // =========================================================================
    // Admin Widgets
    // =========================================================================

    pub async fn kpis(&self) -> RemoteResource<AdminKpis> {
        self.load("kpis", Endpoint::get("/api/admin-kpis"), fallback::kpis())
            .await
    }

    pub async fn map_points(&self) -> RemoteResource<Vec<MapPoint>> {
        self.load("map", Endpoint::get("/api/admin-map-data"), fallback::map_points())
            .await
    }

    pub async fn donation_locations(&self) -> RemoteResource<Vec<DonationLocation>> {
        self.load(
            "heatmap",
            Endpoint::get("/api/donation-locations"),
            fallback::donation_locations(),
        )
        .await
    }

    pub async fn trends(&self) -> RemoteResource<Vec<TrendPoint>> {
        self.load("trends", Endpoint::get("/api/donation-trends"), fallback::trends())
            .await
    }

    /// Partners awaiting approval.
    ///
    /// The backend lists every partner; only pending ones are kept.
    pub async fn pending_partners(&self) -> RemoteResource<Vec<Partner>> {
        self.load(
            "pending_partners",
            Endpoint::get("/api/admin/partners"),
            fallback::pending_partners(),
        )
        .await
        .map(|partners| partners.into_iter().filter(Partner::is_pending).collect())
    }

    pub async fn audit_log(&self) -> RemoteResource<Vec<AuditEntry>> {
        self.load("audit", Endpoint::get("/api/admin/audit"), fallback::audit_log())
            .await
    }

    /// Approve a pending partner.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    #[instrument(skip(self))]
    pub async fn approve(&self, partner_id: PartnerId) -> Result<serde_json::Value, ApiError> {
        let endpoint = Endpoint::post("/api/admin/approve", &ApproveRequest { partner_id })?;
        self.send(&endpoint).await
    }

    // =========================================================================
    // Donations & Chat
    // =========================================================================

    /// Submit a validated donation.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    #[instrument(skip(self, donation), fields(category = %donation.category))]
    pub async fn submit_donation(&self, donation: &Donation) -> Result<DonationAck, ApiError> {
        let endpoint = Endpoint::post("/api/donations", donation)?;
        self.send(&endpoint).await
    }

    /// Ask the remote classifier for a category.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn categorize(&self, description: &str) -> Result<CategorySuggestion, ApiError> {
        let endpoint = Endpoint::post("/api/categorize-description", &CategorizeRequest { description })?;
        self.send(&endpoint).await
    }

    /// Ask the backend chatbot.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        let endpoint = Endpoint::post("/api/chatbot", &ChatRequest { message })?;
        self.send(&endpoint).await
    }
}

/// Pull the `detail` message out of a JSON error body, if there is one.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_endpoint_url_joins_path() {
        let url = Endpoint::get("/api/partners")
            .url(&base("http://localhost:5000"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/partners");
    }

    #[test]
    fn test_endpoint_url_keeps_base_prefix() {
        let url = Endpoint::get("/api/partners")
            .url(&base("https://example.org/recircle/"))
            .unwrap();
        assert_eq!(url.as_str(), "https://example.org/recircle/api/partners");
    }

    #[test]
    fn test_endpoint_query_encodes_and_skips_blank() {
        let url = Endpoint::get("/api/listings")
            .query("category", Some("Food"))
            .query("location", Some("New York"))
            .query("status", Some("  "))
            .query("other", None)
            .url(&base("http://localhost:5000"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/listings?category=Food&location=New+York"
        );
    }

    #[test]
    fn test_endpoint_post_body() {
        let endpoint = Endpoint::post("/api/admin/approve", &ApproveRequest {
            partner_id: PartnerId::new(5),
        })
        .unwrap();
        assert_eq!(endpoint.method, Method::POST);
        assert_eq!(endpoint.body, Some(serde_json::json!({"partner_id": 5})));
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"detail":"Item is not available"}"#),
            Some("Item is not available".to_string())
        );
        assert_eq!(error_detail("<html>oops</html>"), None);
        assert_eq!(error_detail(r#"{"detail":""}"#), None);
    }
}
