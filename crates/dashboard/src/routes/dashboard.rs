//! Dashboard route handler.
//!
//! Loads every resource the signed-in role's widgets need, concurrently, and
//! renders them in layout order. A failed load never fails the page: the
//! widget shows demo data under a warning banner.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use recircle_core::{PartnerId, Role, Session, chat};
use serde::Deserialize;
use tower_sessions::Session as CookieSession;
use tracing::instrument;

use crate::api::ListingFilter;
use crate::filters;
use crate::middleware::RequireSession;
use crate::models::session::dismissed_notifications;
use crate::state::AppState;
use crate::views::{
    self, ApprovalView, BadgesView, ChallengeView, DonationFormView, HeatPoint, ImpactView,
    InsightsView, ListingView, MapMarker, MapView, Panel, TrendsView, WidgetView, layout_for,
    partner,
};

/// Dashboard query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Item listing category filter.
    pub category: Option<String>,
    /// Item listing location filter.
    pub location: Option<String>,
    /// Pending partner search.
    pub q: Option<String>,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub session: Session,
    pub widgets: Vec<WidgetView>,
    pub trends_poll_secs: u64,
    pub chat_greeting: &'static str,
}

/// Dashboard page handler.
#[instrument(skip_all, fields(user_id = %session.id, role = %session.role))]
pub async fn index(
    RequireSession(session): RequireSession,
    State(state): State<AppState>,
    cookie: CookieSession,
    Query(query): Query<DashboardQuery>,
) -> DashboardTemplate {
    let loaded = match session.role {
        Role::Partner => partner_widgets(&state, &session, &cookie, query).await,
        Role::Customer => vec![WidgetView::DonationForm(DonationFormView::new())],
        Role::Admin => admin_widgets(&state, query).await,
    };

    let widgets = views::arrange(layout_for(session.role), loaded);
    let fallbacks = widgets.iter().filter(|w| w.has_fallback()).count();
    if fallbacks > 0 {
        tracing::warn!(fallbacks, "Dashboard rendered with demo data");
    }

    DashboardTemplate {
        session,
        widgets,
        trends_poll_secs: state.config().trends_poll_interval.as_secs(),
        chat_greeting: chat::GREETING,
    }
}

async fn partner_widgets(
    state: &AppState,
    session: &Session,
    cookie: &CookieSession,
    query: DashboardQuery,
) -> Vec<WidgetView> {
    let api = state.api();
    let partner_id = PartnerId::from(session.id);
    let filter = ListingFilter {
        category: query.category,
        location: query.location,
    };

    let (
        items,
        categories,
        locations,
        impact,
        insights,
        forecast,
        leaderboard,
        badges,
        challenges,
        dismissed,
    ) = tokio::join!(
        api.listings(&filter),
        api.categories(),
        api.locations(),
        api.impact(partner_id),
        api.insights(partner_id),
        api.forecast(partner_id),
        api.leaderboard(),
        api.badges(partner_id),
        api.challenges(partner_id),
        dismissed_notifications(cookie),
    );

    vec![
        WidgetView::Notifications(partner::notifications(partner_id, &dismissed)),
        WidgetView::ItemListing(ListingView::new(
            items.into(),
            categories.into(),
            locations.into(),
            filter,
            session.role,
        )),
        WidgetView::Impact(Panel::from(impact.map(ImpactView::from))),
        WidgetView::Insights(Panel::from(insights.map(InsightsView::from))),
        WidgetView::Forecast(forecast.into()),
        WidgetView::Leaderboard(Panel::from(leaderboard.map(partner::leaderboard))),
        WidgetView::Badges(BadgesView {
            badges: badges.into(),
            challenges: Panel::from(challenges.map(|list| {
                list.into_iter()
                    .map(ChallengeView::from)
                    .collect::<Vec<_>>()
            })),
        }),
    ]
}

async fn admin_widgets(state: &AppState, query: DashboardQuery) -> Vec<WidgetView> {
    let api = state.api();

    let (kpis, markers, heat, trends, pending, audit) = tokio::join!(
        api.kpis(),
        api.map_points(),
        api.donation_locations(),
        current_trends(state),
        api.pending_partners(),
        api.audit_log(),
    );

    vec![
        WidgetView::KpiSummary(kpis.into()),
        WidgetView::Map(MapView {
            markers: Panel::from(
                markers.map(|list| list.into_iter().map(MapMarker::from).collect::<Vec<_>>()),
            ),
            heat: Panel::from(
                heat.map(|list| list.into_iter().map(HeatPoint::from).collect::<Vec<_>>()),
            ),
        }),
        WidgetView::Trends(trends),
        WidgetView::ApprovalPanel(ApprovalView::new(
            pending.into(),
            audit.into(),
            query.q.as_deref().unwrap_or_default(),
        )),
    ]
}

/// Latest polled trends, refreshing first if the poller has not finished yet.
pub async fn current_trends(state: &AppState) -> Panel<TrendsView> {
    let trends = state.trends();
    let mut snapshot = trends.latest();
    if !snapshot.resource.is_settled() {
        let api = state.api().clone();
        snapshot = trends.refresh(|| async move { api.trends().await }).await;
    }
    Panel::from(snapshot.resource.map(TrendsView::from))
}
