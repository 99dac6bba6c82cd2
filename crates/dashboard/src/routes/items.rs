//! Item claim and trace handlers.
//!
//! Claims are HTMX actions: the response is the item's row, re-rendered as
//! claimed on success or unchanged with the error on failure.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
};
use recircle_core::{Item, ItemId, ItemStatus, PartnerId, Role, Session};
use serde::Deserialize;
use tracing::instrument;

use crate::api::{ApiError, TraceEvent};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;
use crate::views::{ItemRow, Panel};

/// Shown when the backend gives no reason for a failed claim.
const CLAIM_FAILED: &str = "Failed to claim item";

/// The row's current item values, posted with the claim so the row can be
/// re-rendered without another listing fetch.
#[derive(Debug, Deserialize)]
pub struct ClaimForm {
    pub category: String,
    pub description: String,
    pub location: String,
    pub quantity: u32,
}

impl ClaimForm {
    fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            category: self.category,
            description: self.description,
            location: self.location,
            quantity: self.quantity,
            status: ItemStatus::Available,
        }
    }
}

/// Item row fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/item_row.html")]
pub struct ItemRowTemplate {
    pub row: ItemRow,
}

/// Item audit trail page.
#[derive(Template, WebTemplate)]
#[template(path = "items/trace.html")]
pub struct TraceTemplate {
    pub session: Session,
    pub item_id: ItemId,
    pub panel: Panel<Vec<TraceEvent>>,
}

/// Claim an item for the signed-in partner.
#[instrument(skip(guard, state, form), fields(user_id = %guard.0.id))]
pub async fn claim(
    guard: RequireSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ClaimForm>,
) -> Result<ItemRowTemplate> {
    let session = guard.require_role(Role::Partner)?;
    let item_id = ItemId::new(id);
    let partner_id = PartnerId::from(session.id);
    let item = form.into_item(item_id);

    let row = match state.api().claim(item_id, partner_id).await {
        Ok(ack) => {
            tracing::info!(%item_id, %partner_id, "Item claimed");
            let item_ref = item_id.to_string();
            add_breadcrumb("claim", "Claimed item", Some(&[("item_id", item_ref.as_str())]));
            ItemRow::claimed(item, &ack)
        }
        Err(e) => {
            tracing::warn!(%item_id, error = %e, "Claim failed");
            ItemRow::claim_failed(item, claim_error(&e))
        }
    };

    Ok(ItemRowTemplate { row })
}

/// Message for a failed claim: the backend's reason when it gave one.
fn claim_error(error: &ApiError) -> String {
    match error {
        ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => CLAIM_FAILED.to_string(),
    }
}

/// Show an item's audit trail.
#[instrument(skip(session, state))]
pub async fn trace(
    RequireSession(session): RequireSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> TraceTemplate {
    let item_id = ItemId::new(id);
    TraceTemplate {
        session,
        item_id,
        panel: state.api().trace(item_id).await.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_error_prefers_backend_detail() {
        let err = ApiError::Status {
            status: 400,
            message: "Item is not available".to_string(),
        };
        assert_eq!(claim_error(&err), "Item is not available");
    }

    #[test]
    fn test_claim_error_generic_without_detail() {
        let err = ApiError::Status {
            status: 500,
            message: " ".to_string(),
        };
        assert_eq!(claim_error(&err), CLAIM_FAILED);

        let err = ApiError::from(serde_json::from_str::<u32>("x").err().unwrap_or_else(|| {
            panic!("expected parse error")
        }));
        assert_eq!(claim_error(&err), CLAIM_FAILED);
    }

    #[test]
    fn test_claim_form_builds_available_item() {
        let item = ClaimForm {
            category: "Clothing".to_string(),
            description: "wool coat".to_string(),
            location: "Boston".to_string(),
            quantity: 2,
        }
        .into_item(ItemId::new(42));
        assert_eq!(item.id, ItemId::new(42));
        assert!(item.status.is_available());
    }
}
