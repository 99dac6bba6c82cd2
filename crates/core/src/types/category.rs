//! Donation categories and item statuses.

use serde::{Deserialize, Serialize};

/// Category a donated item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Clothing,
    Electronics,
    Food,
    Furniture,
}

impl Category {
    /// Categories offered on the donation form, in display order.
    pub const ALL: [Self; 4] = [
        Self::Clothing,
        Self::Electronics,
        Self::Food,
        Self::Furniture,
    ];

    /// Display label (also the wire value).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::Food => "Food",
            Self::Furniture => "Furniture",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Status of a listed item.
///
/// Unknown values reported by the backend are kept verbatim so they can be
/// shown as-is instead of failing the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    Claimed,
    #[serde(untagged)]
    Other(String),
}

impl ItemStatus {
    /// Wire value / display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Claimed => "claimed",
            Self::Other(s) => s,
        }
    }

    /// Whether a partner may still claim the item.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("Food".parse::<Category>(), Ok(Category::Food));
        assert!("food".parse::<Category>().is_err());
        assert!("Books".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_default_is_clothing() {
        assert_eq!(Category::default(), Category::Clothing);
    }

    #[test]
    fn test_item_status_known_values() {
        let status: ItemStatus = serde_json::from_str("\"available\"").unwrap_or(ItemStatus::Claimed);
        assert_eq!(status, ItemStatus::Available);
        let status: ItemStatus = serde_json::from_str("\"claimed\"").unwrap_or(ItemStatus::Available);
        assert_eq!(status, ItemStatus::Claimed);
    }

    #[test]
    fn test_item_status_keeps_unknown_values() {
        let status: ItemStatus =
            serde_json::from_str("\"reserved\"").unwrap_or(ItemStatus::Available);
        assert_eq!(status, ItemStatus::Other("reserved".to_string()));
        assert_eq!(status.as_str(), "reserved");
        assert!(!status.is_available());
    }
}
