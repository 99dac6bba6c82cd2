//! Donation form handlers (customer).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use recircle_core::{DonationForm, Role, Session, classify};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;
use crate::views::DonationFormView;

/// Full donation page.
#[derive(Template, WebTemplate)]
#[template(path = "donate/index.html")]
pub struct DonatePageTemplate {
    pub session: Session,
    pub view: DonationFormView,
}

/// Donation form fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/donation_form.html")]
pub struct DonationFormTemplate {
    pub view: DonationFormView,
}

/// Category suggestion fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/category_suggestion.html")]
pub struct SuggestionTemplate {
    pub suggestion: Option<String>,
}

/// Query for the suggestion fragment.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub description: String,
}

/// Show the donation form.
pub async fn page(guard: RequireSession) -> Result<DonatePageTemplate> {
    guard.require_role(Role::Customer)?;
    Ok(DonatePageTemplate {
        session: guard.0,
        view: DonationFormView::new(),
    })
}

/// Submit a donation.
///
/// Validation runs before any backend call. HTMX requests get the form
/// fragment back; plain form posts get the whole page.
#[instrument(skip_all, fields(user_id = %guard.0.id))]
pub async fn submit(
    guard: RequireSession,
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DonationForm>,
) -> Result<Response> {
    guard.require_role(Role::Customer)?;

    let view = match form.validate() {
        Err(invalid) => {
            tracing::debug!(field = invalid.field.name(), "Donation rejected by validation");
            DonationFormView::invalid(form, invalid)
        }
        Ok(donation) => match state.api().submit_donation(&donation).await {
            Ok(ack) => {
                tracing::info!(donation_id = ?ack.donation_id, "Donation submitted");
                add_breadcrumb("donation", "Submitted donation", None);
                DonationFormView::submitted(&ack)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Donation submission failed");
                DonationFormView::failed(form, &e)
            }
        },
    };

    if headers.contains_key("hx-request") {
        Ok(DonationFormTemplate { view }.into_response())
    } else {
        Ok(DonatePageTemplate {
            session: guard.0,
            view,
        }
        .into_response())
    }
}

/// Suggest a category for a description.
///
/// The backend classifier answers when it can; otherwise the local keyword
/// rules do.
#[instrument(skip_all)]
pub async fn suggest(
    _guard: RequireSession,
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> SuggestionTemplate {
    let description = query.description.trim();
    if description.is_empty() {
        return SuggestionTemplate { suggestion: None };
    }

    let suggestion = match state.api().categorize(description).await {
        Ok(remote) => Some(remote.suggested_category).filter(|c| !c.trim().is_empty()),
        Err(e) => {
            tracing::debug!(error = %e, "Remote categorizer unavailable, using keyword rules");
            classify(description).map(|c| c.label().to_string())
        }
    };

    SuggestionTemplate { suggestion }
}
