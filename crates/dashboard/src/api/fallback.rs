//! Demo data shown when the backend cannot be reached.
//!
//! Every widget has a value here so a failed load still renders something
//! useful. Values are fixed and never written back to the backend.

use recircle_core::{Category, ItemId, PartnerId};

use super::types::{
    AdminKpis, AuditEntry, Badge, CategoryCounts, Challenge, DonationLocation, ForecastEntry,
    ImpactSummary, MapPoint, MapPointKind, Partner, PartnerInsights, TraceEvent, TrendPoint,
};

/// Categories offered when `/api/categories` fails.
#[must_use]
pub fn categories() -> Vec<String> {
    Category::ALL.iter().map(|c| c.label().to_string()).collect()
}

/// Demo leaderboard.
#[must_use]
pub fn leaderboard() -> Vec<Partner> {
    vec![
        partner(1, "Community Aid", "New York", 150, None),
        partner(2, "Green Cycle", "Los Angeles", 100, None),
    ]
}

/// Demo impact summary for a partner.
#[must_use]
pub fn impact(partner_id: PartnerId) -> ImpactSummary {
    if partner_id.as_i64() == 1 {
        ImpactSummary {
            partner_id,
            partner_name: "Community Aid".to_string(),
            items_claimed: 3,
            waste_diverted_kg: 75.5,
            people_helped: 30,
            points: 150,
        }
    } else {
        ImpactSummary {
            partner_id,
            partner_name: "Green Cycle".to_string(),
            items_claimed: 2,
            waste_diverted_kg: 35.0,
            people_helped: 20,
            points: 100,
        }
    }
}

/// Demo partner insights.
#[must_use]
pub fn insights() -> PartnerInsights {
    PartnerInsights {
        most_claimed: Category::Clothing.label().to_string(),
        impact_score: 85.0,
    }
}

/// Demo demand forecast.
#[must_use]
pub fn forecast() -> Vec<ForecastEntry> {
    [
        (Category::Clothing, 45),
        (Category::Electronics, 28),
        (Category::Food, 52),
        (Category::Furniture, 22),
    ]
    .into_iter()
    .map(|(category, quantity)| ForecastEntry {
        category: category.label().to_string(),
        quantity,
    })
    .collect()
}

/// Demo badges.
#[must_use]
pub fn badges() -> Vec<Badge> {
    vec![
        badge("Eco Hero", "Achieved 100+ points", true),
        badge("Community Star", "Completed 5+ claims", true),
        badge("Donation Champion", "Donated 50+ items", false),
    ]
}

/// Demo challenges.
#[must_use]
pub fn challenges() -> Vec<Challenge> {
    vec![
        challenge("Claim Champion", 10, 5, "Claim 10 items this month"),
        challenge("Monthly Donor", 5, 3, "Donate 5 items this month"),
        challenge("Eco Warrior", 1000, 750, "Earn 1000 points"),
    ]
}

/// Demo platform KPIs.
#[must_use]
pub const fn kpis() -> AdminKpis {
    AdminKpis {
        total_donations: 1247,
        waste_diverted: 623.5,
        active_partners: 12,
        avg_claim_time: 2.3,
    }
}

/// Demo map markers around New York.
#[must_use]
pub fn map_points() -> Vec<MapPoint> {
    vec![
        map_point(40.7128, -74.0060, MapPointKind::Partner, "Community Aid", "New York"),
        map_point(40.7589, -73.9851, MapPointKind::Donation, "Donation Center", "Manhattan"),
        map_point(40.7505, -73.9934, MapPointKind::Partner, "Food Bank", "Brooklyn"),
        map_point(40.7282, -73.7949, MapPointKind::Donation, "Clothing Drive", "Queens"),
    ]
}

/// Demo donation volumes for the heatmap.
#[must_use]
pub fn donation_locations() -> Vec<DonationLocation> {
    vec![
        donation_location(40.7128, -74.0060, "New York", 15),
        donation_location(40.7589, -73.9851, "Manhattan", 8),
        donation_location(40.7505, -73.9934, "Brooklyn", 12),
    ]
}

/// Demo donation trends.
#[must_use]
pub fn trends() -> Vec<TrendPoint> {
    [
        ("2024-01-01", [25, 15, 30, 10]),
        ("2024-01-02", [30, 20, 35, 12]),
        ("2024-01-03", [28, 18, 32, 15]),
        ("2024-01-04", [35, 22, 40, 18]),
        ("2024-01-05", [32, 25, 38, 20]),
    ]
    .into_iter()
    .map(|(date, [clothing, electronics, food, furniture])| TrendPoint {
        date: date.to_string(),
        categories: CategoryCounts {
            clothing,
            electronics,
            food,
            furniture,
        },
    })
    .collect()
}

/// Demo partners awaiting approval.
#[must_use]
pub fn pending_partners() -> Vec<Partner> {
    vec![
        partner(5, "Eco Warriors", "Boston", 0, Some("pending")),
        partner(6, "Food Bank Central", "Seattle", 0, Some("pending")),
    ]
}

/// Demo claim audit log.
#[must_use]
pub fn audit_log() -> Vec<AuditEntry> {
    [
        (1, 1, "2025-01-06T10:30:00Z"),
        (2, 2, "2025-01-06T11:15:00Z"),
        (3, 1, "2025-01-06T12:45:00Z"),
    ]
    .into_iter()
    .map(|(item, partner, timestamp)| AuditEntry {
        item_id: ItemId::new(item),
        partner_id: PartnerId::new(partner),
        timestamp: timestamp.to_string(),
    })
    .collect()
}

/// Demo trail for an item: listed, then claimed by partner 1.
#[must_use]
pub fn trace(item_id: ItemId) -> Vec<TraceEvent> {
    vec![
        TraceEvent {
            item_id,
            event: "listed".to_string(),
            timestamp: "2025-01-06T12:00:00Z".to_string(),
            partner_id: None,
        },
        TraceEvent {
            item_id,
            event: "claimed".to_string(),
            timestamp: "2025-01-06T14:30:00Z".to_string(),
            partner_id: Some(PartnerId::new(1)),
        },
    ]
}

// =============================================================================
// Helpers
// =============================================================================

fn partner(id: i64, name: &str, location: &str, points: u32, status: Option<&str>) -> Partner {
    Partner {
        id: PartnerId::new(id),
        name: name.to_string(),
        location: location.to_string(),
        points,
        status: status.map(String::from),
    }
}

fn badge(name: &str, description: &str, earned: bool) -> Badge {
    Badge {
        name: name.to_string(),
        description: description.to_string(),
        earned,
    }
}

fn challenge(name: &str, target: u32, progress: u32, description: &str) -> Challenge {
    Challenge {
        name: name.to_string(),
        target,
        progress,
        description: description.to_string(),
    }
}

fn map_point(lat: f64, lng: f64, kind: MapPointKind, name: &str, location: &str) -> MapPoint {
    MapPoint {
        lat,
        lng,
        kind,
        name: name.to_string(),
        location: location.to_string(),
    }
}

fn donation_location(lat: f64, lng: f64, location: &str, quantity: u32) -> DonationLocation {
    DonationLocation {
        lat,
        lng,
        location: location.to_string(),
        quantity,
    }
}
