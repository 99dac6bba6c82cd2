//! Admin fragment handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::{HeaderName, HeaderValue},
    response::{AppendHeaders, IntoResponse, Response},
};
use recircle_core::{PartnerId, Role};
use serde::Deserialize;
use tracing::instrument;

use crate::api::Partner;
use crate::error::{Result, add_breadcrumb};
use crate::middleware::RequireSession;
use crate::routes::dashboard::current_trends;
use crate::state::AppState;
use crate::views::{Panel, PendingRow, TrendsView};

/// Trends chart fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/trends.html")]
pub struct TrendsTemplate {
    pub panel: Panel<TrendsView>,
    pub trends_poll_secs: u64,
}

/// A pending partner row, re-rendered when approval fails.
#[derive(Template, WebTemplate)]
#[template(path = "partials/partner_row.html")]
pub struct PartnerRowTemplate {
    pub row: PendingRow,
}

/// The row's partner values, posted with the approval.
#[derive(Debug, Deserialize)]
pub struct ApproveForm {
    pub name: String,
    pub location: String,
}

/// Latest donation trends.
pub async fn trends(guard: RequireSession, State(state): State<AppState>) -> Result<TrendsTemplate> {
    guard.require_role(Role::Admin)?;
    Ok(TrendsTemplate {
        panel: current_trends(&state).await,
        trends_poll_secs: state.config().trends_poll_interval.as_secs(),
    })
}

/// Approve a pending partner.
///
/// Success returns an empty body so the row is swapped out, and triggers
/// `partnerApproved`. Failure keeps the row and shows the error.
#[instrument(skip(guard, state, form), fields(user_id = %guard.0.id))]
pub async fn approve(
    guard: RequireSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ApproveForm>,
) -> Result<Response> {
    guard.require_role(Role::Admin)?;
    let partner_id = PartnerId::new(id);

    match state.api().approve(partner_id).await {
        Ok(_) => {
            tracing::info!(%partner_id, "Partner approved");
            let partner_ref = partner_id.to_string();
            add_breadcrumb(
                "admin",
                "Approved partner",
                Some(&[("partner_id", partner_ref.as_str())]),
            );
            Ok((
                AppendHeaders([(
                    HeaderName::from_static("hx-trigger"),
                    HeaderValue::from_static("partnerApproved"),
                )]),
                "",
            )
                .into_response())
        }
        Err(e) => {
            tracing::warn!(%partner_id, error = %e, "Partner approval failed");
            Ok(PartnerRowTemplate {
                row: PendingRow {
                    partner: Partner {
                        id: partner_id,
                        name: form.name,
                        location: form.location,
                        points: 0,
                        status: Some("pending".to_string()),
                    },
                    error: Some(format!("Approval failed: {}", e.user_message())),
                },
            }
            .into_response())
        }
    }
}
