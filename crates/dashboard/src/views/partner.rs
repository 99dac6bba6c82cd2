//! Partner widget views.

use recircle_core::PartnerId;

use crate::api::{Challenge, ImpactSummary, Partner, PartnerInsights};

// =============================================================================
// Leaderboard
// =============================================================================

/// A ranked leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    /// Marker for the podium places.
    pub marker: Option<&'static str>,
    pub name: String,
    pub location: String,
    pub points: u32,
}

/// Rank partners in the order the backend returned them.
#[must_use]
pub fn leaderboard(partners: Vec<Partner>) -> Vec<LeaderboardRow> {
    partners
        .into_iter()
        .enumerate()
        .map(|(i, partner)| {
            let rank = i + 1;
            LeaderboardRow {
                rank,
                marker: podium_marker(rank),
                name: partner.name,
                location: partner.location,
                points: partner.points,
            }
        })
        .collect()
}

const fn podium_marker(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("trophy"),
        2 => Some("medal"),
        3 => Some("award"),
        _ => None,
    }
}

// =============================================================================
// Impact
// =============================================================================

/// kg of CO2 avoided per kg of waste diverted.
const CO2_PER_KG_WASTE: f64 = 0.2;
/// Average item weight in kg.
const KG_PER_ITEM: f64 = 0.5;
/// Trees per kg of CO2 avoided.
const TREES_PER_KG_CO2: f64 = 0.1;

/// Impact calculator output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactView {
    pub partner_name: String,
    pub items_claimed: u32,
    pub people_helped: u32,
    pub points: u32,
    pub waste_kg: f64,
    pub co2_kg: f64,
    pub items_equivalent: i64,
    pub trees_equivalent: i64,
    pub level: &'static str,
}

impl From<ImpactSummary> for ImpactView {
    #[allow(clippy::cast_possible_truncation)]
    fn from(summary: ImpactSummary) -> Self {
        let waste_kg = summary.waste_diverted_kg;
        let co2_kg = waste_kg * CO2_PER_KG_WASTE;
        Self {
            partner_name: summary.partner_name,
            items_claimed: summary.items_claimed,
            people_helped: summary.people_helped,
            points: summary.points,
            waste_kg,
            co2_kg,
            items_equivalent: (waste_kg / KG_PER_ITEM).round() as i64,
            trees_equivalent: (co2_kg * TREES_PER_KG_CO2).round() as i64,
            level: impact_level(waste_kg),
        }
    }
}

/// Recognition level for the kilograms of waste a partner has diverted.
#[must_use]
pub fn impact_level(waste_kg: f64) -> &'static str {
    if waste_kg >= 100.0 {
        "Eco Champion"
    } else if waste_kg >= 50.0 {
        "Green Leader"
    } else if waste_kg >= 25.0 {
        "Sustainability Starter"
    } else {
        "Getting Started"
    }
}

// =============================================================================
// Insights
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightsView {
    pub most_claimed: String,
    pub impact_score: f64,
    pub level: &'static str,
}

impl From<PartnerInsights> for InsightsView {
    fn from(insights: PartnerInsights) -> Self {
        Self {
            level: insights_level(insights.impact_score),
            most_claimed: insights.most_claimed,
            impact_score: insights.impact_score,
        }
    }
}

#[must_use]
pub fn insights_level(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else {
        "Needs Improvement"
    }
}

// =============================================================================
// Challenges
// =============================================================================

/// A challenge with its progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeView {
    pub name: String,
    pub description: String,
    pub progress: u32,
    pub target: u32,
    /// 0..=100.
    pub percent: u32,
    pub remaining: u32,
}

impl From<Challenge> for ChallengeView {
    fn from(challenge: Challenge) -> Self {
        Self {
            percent: progress_percent(challenge.progress, challenge.target),
            remaining: challenge.target.saturating_sub(challenge.progress),
            name: challenge.name,
            description: challenge.description,
            progress: challenge.progress,
            target: challenge.target,
        }
    }
}

/// Percent complete, capped at 100. A zero target counts as complete.
#[must_use]
pub fn progress_percent(progress: u32, target: u32) -> u32 {
    if target == 0 {
        return 100;
    }
    let percent = u64::from(progress) * 100 / u64::from(target);
    u32::try_from(percent.min(100)).unwrap_or(100)
}

// =============================================================================
// Notifications
// =============================================================================

/// A nearby-item alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: u32,
    pub message: &'static str,
    pub location: &'static str,
}

const DEMO_NOTIFICATIONS: &[NotificationView] = &[
    NotificationView {
        id: 1,
        message: "New electronics available in your area!",
        location: "New York",
    },
    NotificationView {
        id: 2,
        message: "Clothing donation just added nearby",
        location: "New York",
    },
];

/// Alerts for a partner, minus the ones already dismissed.
///
/// Only the New York demo partner has alerts.
#[must_use]
pub fn notifications(partner_id: PartnerId, dismissed: &[u32]) -> Vec<NotificationView> {
    if partner_id.as_i64() != 1 {
        return Vec::new();
    }
    DEMO_NOTIFICATIONS
        .iter()
        .filter(|n| !dismissed.contains(&n.id))
        .cloned()
        .collect()
}
