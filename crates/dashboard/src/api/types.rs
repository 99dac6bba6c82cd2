//! Wire types for the ReCircle backend.
//!
//! Field names follow the backend: snake_case for most records, camelCase
//! where the backend uses it (`totalDonations`, `suggestedCategory`, ...).

use recircle_core::{Category, ItemId, ItemStatus, PartnerId};
use serde::{Deserialize, Serialize};

// =============================================================================
// Partner Types
// =============================================================================

/// Partner organization, as listed on the leaderboard and approval queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub points: u32,
    /// Approval status (`pending`, `approved`); absent on the leaderboard.
    #[serde(default)]
    pub status: Option<String>,
}

impl Partner {
    /// Whether the partner is waiting for admin approval.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("pending"))
    }
}

/// Claim impact summary for one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub partner_id: PartnerId,
    pub partner_name: String,
    pub items_claimed: u32,
    /// Kilograms kept out of landfill (0.5 kg per claimed unit).
    pub waste_diverted_kg: f64,
    pub people_helped: u32,
    pub points: u32,
}

/// Derived partner insights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerInsights {
    pub most_claimed: String,
    /// 0-100 score.
    pub impact_score: f64,
}

/// Predicted demand for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub category: String,
    pub quantity: u32,
}

// =============================================================================
// Gamification Types
// =============================================================================

/// An achievement badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
    pub earned: bool,
}

/// A progress-tracked challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub name: String,
    pub target: u32,
    pub progress: u32,
    pub description: String,
}

// =============================================================================
// Admin Types
// =============================================================================

/// Platform-wide key performance indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminKpis {
    pub total_donations: u64,
    /// Kilograms.
    pub waste_diverted: f64,
    pub active_partners: u32,
    /// Days from listing to claim.
    pub avg_claim_time: f64,
}

/// Kind of marker on the admin map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapPointKind {
    Partner,
    Donation,
}

/// A partner or donation site on the admin map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: MapPointKind,
    pub name: String,
    pub location: String,
}

/// Donation volume at a location, for the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationLocation {
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    pub quantity: u32,
}

/// Donations per category for one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryCounts {
    #[serde(default)]
    pub clothing: u32,
    #[serde(default)]
    pub electronics: u32,
    #[serde(default)]
    pub food: u32,
    #[serde(default)]
    pub furniture: u32,
}

impl CategoryCounts {
    /// Count for one category.
    #[must_use]
    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::Clothing => self.clothing,
            Category::Electronics => self.electronics,
            Category::Food => self.food,
            Category::Furniture => self.furniture,
        }
    }
}

/// One point of the donation trends series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub categories: CategoryCounts,
}

/// A claim recorded in the admin audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub item_id: ItemId,
    pub partner_id: PartnerId,
    pub timestamp: String,
}

/// One event in an item's tamper-evident trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub item_id: ItemId,
    pub event: String,
    pub timestamp: String,
    #[serde(default)]
    pub partner_id: Option<PartnerId>,
}

// =============================================================================
// Action Types
// =============================================================================

/// Body of `POST /api/claim`.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimRequest {
    pub item_id: ItemId,
    pub partner_id: PartnerId,
}

/// Acknowledgement of a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimAck {
    pub item_id: ItemId,
    pub partner_id: PartnerId,
    pub status: ItemStatus,
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement of a donation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub donation_id: Option<i64>,
}

/// Body of `POST /api/admin/approve`.
#[derive(Debug, Clone, Serialize)]
pub struct ApproveRequest {
    pub partner_id: PartnerId,
}

/// Body of `POST /api/chatbot`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Reply from the backend chatbot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Body of `POST /api/categorize-description`.
#[derive(Debug, Clone, Serialize)]
pub struct CategorizeRequest<'a> {
    pub description: &'a str,
}

/// Remote classifier suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySuggestion {
    #[serde(default)]
    pub suggested_category: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kpis_camel_case() {
        let json = r#"{"totalDonations":10,"wasteDiverted":5.5,"activePartners":2,"avgClaimTime":1.5}"#;
        let kpis: AdminKpis = serde_json::from_str(json).unwrap();
        assert_eq!(kpis.total_donations, 10);
        assert_eq!(kpis.active_partners, 2);
    }

    #[test]
    fn test_map_point_kind() {
        let json = r#"{"lat":1.0,"lng":2.0,"type":"donation","name":"Drive","location":"Queens"}"#;
        let point: MapPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.kind, MapPointKind::Donation);
    }

    #[test]
    fn test_trend_point_categories() {
        let json = r#"{"date":"2024-01-01","categories":{"Clothing":25,"Food":30}}"#;
        let point: TrendPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.categories.get(Category::Clothing), 25);
        assert_eq!(point.categories.get(Category::Food), 30);
        assert_eq!(point.categories.get(Category::Furniture), 0);
    }

    #[test]
    fn test_trace_event_null_partner() {
        let json = r#"{"item_id":3,"event":"listed","timestamp":"2025-01-06T12:00:00Z","partner_id":null}"#;
        let event: TraceEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.partner_id, None);
    }

    #[test]
    fn test_partner_pending() {
        let json = r#"{"id":5,"name":"Eco Warriors","location":"Boston","status":"Pending"}"#;
        let partner: Partner = serde_json::from_str(json).unwrap();
        assert!(partner.is_pending());
        assert_eq!(partner.points, 0);
    }

    #[test]
    fn test_claim_request_shape() {
        let body = serde_json::to_value(ClaimRequest {
            item_id: ItemId::new(42),
            partner_id: PartnerId::new(7),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"item_id": 42, "partner_id": 7}));
    }
}
