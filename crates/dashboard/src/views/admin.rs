//! Admin widget views.
//!
//! Map, heatmap and trend data are rendered client-side, so their views are
//! `Serialize` and embedded in the page with [`json_island`](super::json_island).

use recircle_core::Category;
use serde::Serialize;

use super::{Panel, json_island};
use crate::api::{AuditEntry, DonationLocation, MapPoint, MapPointKind, Partner, TrendPoint};

// =============================================================================
// Map
// =============================================================================

/// A styled marker for the partner/donation map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub kind: &'static str,
    pub color: &'static str,
    pub name: String,
    pub location: String,
}

impl From<MapPoint> for MapMarker {
    fn from(point: MapPoint) -> Self {
        let (kind, color) = match point.kind {
            MapPointKind::Partner => ("partner", "#16a34a"),
            MapPointKind::Donation => ("donation", "#2563eb"),
        };
        Self {
            lat: point.lat,
            lng: point.lng,
            kind,
            color,
            name: point.name,
            location: point.location,
        }
    }
}

/// A heatmap circle sized by donation volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    pub quantity: u32,
    pub radius: u32,
}

impl From<DonationLocation> for HeatPoint {
    fn from(location: DonationLocation) -> Self {
        Self {
            radius: heat_radius(location.quantity),
            lat: location.lat,
            lng: location.lng,
            location: location.location,
            quantity: location.quantity,
        }
    }
}

/// Circle radius for a donation quantity, clamped to 5..=20.
#[must_use]
pub fn heat_radius(quantity: u32) -> u32 {
    quantity.saturating_mul(2).clamp(5, 20)
}

/// Map widget: markers plus heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub markers: Panel<Vec<MapMarker>>,
    pub heat: Panel<Vec<HeatPoint>>,
}

impl MapView {
    #[must_use]
    pub fn markers_json(&self) -> String {
        json_island(&self.markers.data)
    }

    #[must_use]
    pub fn heat_json(&self) -> String {
        json_island(&self.heat.data)
    }
}

// =============================================================================
// Trends
// =============================================================================

/// One category's counts across the trend dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub label: &'static str,
    pub values: Vec<u32>,
}

/// Chart data: one label per date and one series per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendsView {
    pub labels: Vec<String>,
    pub series: Vec<TrendSeries>,
}

impl TrendsView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn json(&self) -> String {
        json_island(self)
    }
}

impl From<Vec<TrendPoint>> for TrendsView {
    fn from(points: Vec<TrendPoint>) -> Self {
        let series = Category::ALL
            .into_iter()
            .map(|category| TrendSeries {
                label: category.label(),
                values: points.iter().map(|p| p.categories.get(category)).collect(),
            })
            .collect();
        Self {
            labels: points.into_iter().map(|p| p.date).collect(),
            series,
        }
    }
}

// =============================================================================
// Approvals
// =============================================================================

/// A pending partner awaiting approval.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRow {
    pub partner: Partner,
    /// Error from the last approval attempt.
    pub error: Option<String>,
}

impl PendingRow {
    #[must_use]
    pub const fn new(partner: Partner) -> Self {
        Self {
            partner,
            error: None,
        }
    }
}

/// Approval panel: pending partners (optionally searched) and the claim log.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalView {
    pub partners: Panel<Vec<PendingRow>>,
    pub audit: Panel<Vec<AuditEntry>>,
    pub query: String,
}

impl ApprovalView {
    #[must_use]
    pub fn new(partners: Panel<Vec<Partner>>, audit: Panel<Vec<AuditEntry>>, query: &str) -> Self {
        Self {
            partners: partners.map(|list| {
                search_partners(list, query)
                    .into_iter()
                    .map(PendingRow::new)
                    .collect()
            }),
            audit,
            query: query.trim().to_string(),
        }
    }
}

/// Case-insensitive match on name or location. A blank query keeps all.
#[must_use]
pub fn search_partners(partners: Vec<Partner>, query: &str) -> Vec<Partner> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return partners;
    }
    partners
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.location.to_lowercase().contains(&needle)
        })
        .collect()
}
