//! Keyword category classifier.
//!
//! A single ordered rule table maps free text to a [`Category`]. The same
//! function backs the pre-submit suggestion and the fallback used when the
//! remote classifier is unavailable, so both call sites always agree.

use crate::types::Category;

/// An ordered rule: if any keyword occurs in the text, suggest the category.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

/// Rules are checked in order; the first match wins.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &[
            "shirt", "pants", "dress", "jacket", "coat", "sweater", "jeans", "shoes",
        ],
        category: Category::Clothing,
    },
    ClassificationRule {
        keywords: &[
            "phone",
            "laptop",
            "computer",
            "tv",
            "tablet",
            "charger",
            "headphones",
            "camera",
        ],
        category: Category::Electronics,
    },
    ClassificationRule {
        keywords: &["canned", "food", "rice", "beans", "pasta", "soup", "cereal"],
        category: Category::Food,
    },
    ClassificationRule {
        keywords: &[
            "chair", "table", "sofa", "couch", "bed", "desk", "dresser", "lamp",
        ],
        category: Category::Furniture,
    },
];

/// Suggest a category for free text.
///
/// Case-insensitive substring containment against [`RULES`]. Returns `None`
/// for empty or unmatched text.
#[must_use]
pub fn classify(text: &str) -> Option<Category> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
        .map(|rule| rule.category)
}
