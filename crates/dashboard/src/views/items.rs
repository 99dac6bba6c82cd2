//! Item listing view and claim outcomes.

use recircle_core::{Item, Role};

use super::Panel;
use crate::api::{ClaimAck, ListingFilter};

/// One row of the item listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub item: Item,
    /// Whether the viewer may claim this item now.
    pub can_claim: bool,
    /// Error from the last claim attempt on this row.
    pub error: Option<String>,
}

impl ItemRow {
    #[must_use]
    pub fn new(item: Item, viewer: Role) -> Self {
        Self {
            can_claim: viewer == Role::Partner && item.status.is_available(),
            item,
            error: None,
        }
    }

    /// Row after a successful claim: status `claimed`, no claim control.
    #[must_use]
    pub fn claimed(mut item: Item, ack: &ClaimAck) -> Self {
        item.mark_claimed();
        if ack.status != item.status {
            tracing::debug!(item_id = %item.id, status = %ack.status, "Backend reported unexpected claim status");
        }
        Self {
            item,
            can_claim: false,
            error: None,
        }
    }

    /// Row after a failed claim: unchanged, with the error shown.
    #[must_use]
    pub fn claim_failed(item: Item, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::new(item, Role::Partner)
        }
    }
}

/// Item listing with its filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub rows: Vec<ItemRow>,
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub filter: ListingFilter,
    /// Warnings from any of the three loads that fell back.
    pub warnings: Vec<String>,
}

impl ListingView {
    #[must_use]
    pub fn new(
        items: Panel<Vec<Item>>,
        categories: Panel<Vec<String>>,
        locations: Panel<Vec<String>>,
        filter: ListingFilter,
        viewer: Role,
    ) -> Self {
        let warnings = [&items.warning, &categories.warning, &locations.warning]
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        Self {
            rows: items
                .data
                .into_iter()
                .map(|item| ItemRow::new(item, viewer))
                .collect(),
            categories: categories.data,
            locations: locations.data,
            filter,
            warnings,
        }
    }

    /// Whether `option` is the active category filter.
    #[must_use]
    pub fn is_selected_category(&self, option: &str) -> bool {
        self.filter.category.as_deref() == Some(option)
    }

    /// Whether `option` is the active location filter.
    #[must_use]
    pub fn is_selected_location(&self, option: &str) -> bool {
        self.filter.location.as_deref() == Some(option)
    }
}
