//! Role-gated dashboard composition.
//!
//! Each role sees a fixed list of [`Widget`]s. The dashboard route loads the
//! data those widgets need and hands the template one [`WidgetView`] per
//! widget, in layout order. Data that fell back to demo values is wrapped in
//! a [`Panel`] carrying the warning to show above it.

pub mod admin;
pub mod donate;
pub mod items;
pub mod partner;

use recircle_core::Role;
use serde::Serialize;

use crate::api::{AdminKpis, Badge, ForecastEntry};
use crate::resource::RemoteResource;

pub use admin::{ApprovalView, HeatPoint, MapMarker, MapView, PendingRow, TrendsView};
pub use donate::DonationFormView;
pub use items::{ItemRow, ListingView};
pub use partner::{ChallengeView, ImpactView, InsightsView, LeaderboardRow, NotificationView};

/// Banner prefix for widgets showing fallback data.
pub const FALLBACK_WARNING: &str = "Warning: showing demo data";

// =============================================================================
// Layout
// =============================================================================

/// A dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Notifications,
    ItemListing,
    Impact,
    Insights,
    Forecast,
    Leaderboard,
    Badges,
    DonationForm,
    KpiSummary,
    Map,
    Trends,
    ApprovalPanel,
}

impl Widget {
    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::ItemListing => "Available Items",
            Self::Impact => "Impact Calculator",
            Self::Insights => "Partner Insights",
            Self::Forecast => "Demand Forecast",
            Self::Leaderboard => "Partner Leaderboard",
            Self::Badges => "Badges & Challenges",
            Self::DonationForm => "Donate Items",
            Self::KpiSummary => "Platform KPIs",
            Self::Map => "Partner & Donation Map",
            Self::Trends => "Donation Trends",
            Self::ApprovalPanel => "Partner Approvals",
        }
    }
}

const PARTNER_LAYOUT: &[Widget] = &[
    Widget::Notifications,
    Widget::ItemListing,
    Widget::Impact,
    Widget::Insights,
    Widget::Forecast,
    Widget::Leaderboard,
    Widget::Badges,
];

const CUSTOMER_LAYOUT: &[Widget] = &[Widget::DonationForm];

const ADMIN_LAYOUT: &[Widget] = &[
    Widget::KpiSummary,
    Widget::Map,
    Widget::Trends,
    Widget::ApprovalPanel,
];

/// The widgets shown to `role`, in display order.
#[must_use]
pub const fn layout_for(role: Role) -> &'static [Widget] {
    match role {
        Role::Partner => PARTNER_LAYOUT,
        Role::Customer => CUSTOMER_LAYOUT,
        Role::Admin => ADMIN_LAYOUT,
    }
}

// =============================================================================
// Panels
// =============================================================================

/// Settled widget data plus the warning to show when it is demo data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel<T> {
    pub warning: Option<String>,
    pub data: T,
}

impl<T> Panel<T> {
    /// Data fetched from the backend.
    pub const fn live(data: T) -> Self {
        Self {
            warning: None,
            data,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }

    /// Transform the data, keeping the warning.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Panel<U> {
        Panel {
            warning: self.warning,
            data: f(self.data),
        }
    }
}

impl<T: Default> From<RemoteResource<T>> for Panel<T> {
    fn from(resource: RemoteResource<T>) -> Self {
        let warning = resource.is_fallback().then(|| {
            resource.error_message().map_or_else(
                || FALLBACK_WARNING.to_string(),
                |message| format!("{FALLBACK_WARNING} ({message})"),
            )
        });
        Self {
            warning,
            data: resource.into_value().unwrap_or_default(),
        }
    }
}

// =============================================================================
// Widget Views
// =============================================================================

/// Badges and challenges share one section.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgesView {
    pub badges: Panel<Vec<Badge>>,
    pub challenges: Panel<Vec<ChallengeView>>,
}

/// One rendered dashboard section.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView {
    Notifications(Vec<NotificationView>),
    ItemListing(ListingView),
    Impact(Panel<ImpactView>),
    Insights(Panel<InsightsView>),
    Forecast(Panel<Vec<ForecastEntry>>),
    Leaderboard(Panel<Vec<LeaderboardRow>>),
    Badges(BadgesView),
    DonationForm(DonationFormView),
    KpiSummary(Panel<AdminKpis>),
    Map(MapView),
    Trends(Panel<TrendsView>),
    ApprovalPanel(ApprovalView),
}

impl WidgetView {
    #[must_use]
    pub const fn widget(&self) -> Widget {
        match self {
            Self::Notifications(_) => Widget::Notifications,
            Self::ItemListing(_) => Widget::ItemListing,
            Self::Impact(_) => Widget::Impact,
            Self::Insights(_) => Widget::Insights,
            Self::Forecast(_) => Widget::Forecast,
            Self::Leaderboard(_) => Widget::Leaderboard,
            Self::Badges(_) => Widget::Badges,
            Self::DonationForm(_) => Widget::DonationForm,
            Self::KpiSummary(_) => Widget::KpiSummary,
            Self::Map(_) => Widget::Map,
            Self::Trends(_) => Widget::Trends,
            Self::ApprovalPanel(_) => Widget::ApprovalPanel,
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.widget().title()
    }

    /// Whether any data in this section is demo data.
    #[must_use]
    pub fn has_fallback(&self) -> bool {
        match self {
            Self::Notifications(_) | Self::DonationForm(_) => false,
            Self::ItemListing(listing) => !listing.warnings.is_empty(),
            Self::Impact(p) => p.is_fallback(),
            Self::Insights(p) => p.is_fallback(),
            Self::Forecast(p) => p.is_fallback(),
            Self::Leaderboard(p) => p.is_fallback(),
            Self::Badges(b) => b.badges.is_fallback() || b.challenges.is_fallback(),
            Self::KpiSummary(p) => p.is_fallback(),
            Self::Map(m) => m.markers.is_fallback() || m.heat.is_fallback(),
            Self::Trends(p) => p.is_fallback(),
            Self::ApprovalPanel(a) => a.partners.is_fallback() || a.audit.is_fallback(),
        }
    }
}

/// Order loaded sections by `layout`, dropping any the layout does not name.
#[must_use]
pub fn arrange(layout: &[Widget], mut loaded: Vec<WidgetView>) -> Vec<WidgetView> {
    layout
        .iter()
        .filter_map(|widget| {
            let index = loaded.iter().position(|view| view.widget() == *widget)?;
            Some(loaded.swap_remove(index))
        })
        .collect()
}

/// Serialize `value` for a `<script type="application/json">` block.
///
/// `</` is escaped so the payload cannot close the script element.
#[must_use]
pub fn json_island(value: &impl Serialize) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize widget data");
            "null".to_string()
        })
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_layout() {
        assert_eq!(
            layout_for(Role::Partner),
            &[
                Widget::Notifications,
                Widget::ItemListing,
                Widget::Impact,
                Widget::Insights,
                Widget::Forecast,
                Widget::Leaderboard,
                Widget::Badges,
            ]
        );
    }

    #[test]
    fn test_customer_layout_is_donation_form_only() {
        assert_eq!(layout_for(Role::Customer), &[Widget::DonationForm]);
    }

    #[test]
    fn test_admin_layout() {
        assert_eq!(
            layout_for(Role::Admin),
            &[
                Widget::KpiSummary,
                Widget::Map,
                Widget::Trends,
                Widget::ApprovalPanel
            ]
        );
    }

    #[test]
    fn test_layouts_do_not_overlap() {
        for widget in layout_for(Role::Customer) {
            assert!(!layout_for(Role::Partner).contains(widget));
            assert!(!layout_for(Role::Admin).contains(widget));
        }
        for widget in layout_for(Role::Admin) {
            assert!(!layout_for(Role::Partner).contains(widget));
        }
    }

    #[test]
    fn test_panel_from_success_has_no_warning() {
        let resource = RemoteResource::idle().loading().succeed(vec![1, 2]);
        let panel = Panel::from(resource);
        assert_eq!(panel, Panel::live(vec![1, 2]));
    }

    #[test]
    fn test_panel_from_empty_success_is_not_fallback() {
        let panel: Panel<Vec<u32>> = RemoteResource::idle().succeed(Vec::new()).into();
        assert!(!panel.is_fallback());
        assert!(panel.data.is_empty());
    }

    #[test]
    fn test_panel_from_failure_warns_with_message() {
        let resource = RemoteResource::idle()
            .loading()
            .fail("HTTP 503: Service Unavailable", vec![7]);
        let panel = Panel::from(resource);
        assert_eq!(panel.data, vec![7]);
        assert_eq!(
            panel.warning.as_deref(),
            Some("Warning: showing demo data (HTTP 503: Service Unavailable)")
        );
    }

    #[test]
    fn test_arrange_follows_layout() {
        let loaded = vec![
            WidgetView::Trends(Panel::live(TrendsView::default())),
            WidgetView::DonationForm(DonationFormView::new()),
            WidgetView::KpiSummary(Panel::live(AdminKpis::default())),
        ];
        let arranged = arrange(layout_for(Role::Admin), loaded);
        let widgets: Vec<_> = arranged.iter().map(WidgetView::widget).collect();
        assert_eq!(widgets, vec![Widget::KpiSummary, Widget::Trends]);
    }

    #[test]
    fn test_json_island_escapes_script_close() {
        let island = json_island(&["</script><b>"]);
        assert!(!island.contains("</script>"));
        assert_eq!(island, r#"["<\/script><b>"]"#);
    }

    #[test]
    fn test_widget_view_reports_its_widget() {
        let view = WidgetView::KpiSummary(Panel::live(AdminKpis::default()));
        assert_eq!(view.widget(), Widget::KpiSummary);
        assert_eq!(view.title(), "Platform KPIs");
        assert!(!view.has_fallback());
    }
}
