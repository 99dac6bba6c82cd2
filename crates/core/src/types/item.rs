//! Listed donation items.

use serde::{Deserialize, Serialize};

use super::{ItemId, ItemStatus};

/// A donated item as listed by the backend.
///
/// `category` stays a plain string: the backend may list categories the
/// donation form does not offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: String,
    pub description: String,
    pub location: String,
    pub quantity: u32,
    pub status: ItemStatus,
}

impl Item {
    /// Mark the item as claimed.
    pub fn mark_claimed(&mut self) {
        self.status = ItemStatus::Claimed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_backend_shape() {
        let json = r#"{"id":42,"category":"Clothing","description":"wool coat","location":"Boston","quantity":2,"status":"available"}"#;
        let item: Item = serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(item.id, ItemId::new(42));
        assert!(item.status.is_available());
    }

    #[test]
    fn test_mark_claimed() {
        let mut item = Item {
            id: ItemId::new(1),
            category: "Food".to_string(),
            description: "rice".to_string(),
            location: "Boston".to_string(),
            quantity: 3,
            status: ItemStatus::Available,
        };
        item.mark_claimed();
        assert_eq!(item.status, ItemStatus::Claimed);
    }
}
