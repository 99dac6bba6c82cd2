//! Donation form state and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Category;

/// Field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Description,
    Location,
    Quantity,
}

impl Field {
    /// Form field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Description => "description",
            Self::Location => "location",
            Self::Quantity => "quantity",
        }
    }
}

/// Donation form validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

impl ValidationError {
    const fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Donation form as entered by a customer.
///
/// Values are kept as typed so an invalid submission can be re-rendered
/// without losing input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// As typed; parsed by [`DonationForm::validate`].
    #[serde(default)]
    pub quantity: String,
}

impl Default for DonationForm {
    fn default() -> Self {
        Self {
            category: Category::default().label().to_string(),
            description: String::new(),
            location: String::new(),
            quantity: "1".to_string(),
        }
    }
}

/// A validated donation, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Donation {
    pub category: Category,
    pub description: String,
    pub location: String,
    pub quantity: u32,
    pub source: &'static str,
}

impl DonationForm {
    /// Validate the form.
    ///
    /// Checks run in field order and stop at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first failing field and its user-facing message.
    pub fn validate(&self) -> Result<Donation, ValidationError> {
        let category = self
            .category
            .trim()
            .parse::<Category>()
            .map_err(|_| ValidationError::new(Field::Category, "Category is required"))?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::new(
                Field::Description,
                "Description is required",
            ));
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationError::new(Field::Location, "Location is required"));
        }

        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or(ValidationError::new(
                Field::Quantity,
                "Quantity must be greater than 0",
            ))?;

        Ok(Donation {
            category,
            description: description.to_string(),
            location: location.to_string(),
            quantity,
            source: "customer",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(category: &str, description: &str, location: &str, quantity: &str) -> DonationForm {
        DonationForm {
            category: category.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_default_form() {
        let form = DonationForm::default();
        assert_eq!(form.category, "Clothing");
        assert_eq!(form.description, "");
        assert_eq!(form.location, "");
        assert_eq!(form.quantity, "1");
    }

    #[test]
    fn test_valid_donation() {
        let donation = form("Clothing", "wool coat", "Boston", "2")
            .validate()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(donation.category, Category::Clothing);
        assert_eq!(donation.quantity, 2);
        assert_eq!(donation.source, "customer");
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        for quantity in ["0", "-3", "", "  ", "abc", "2.5"] {
            let err = form("Food", "rice", "Boston", quantity)
                .validate()
                .expect_err("quantity should be rejected");
            assert_eq!(err.field, Field::Quantity);
            assert_eq!(err.to_string(), "Quantity must be greater than 0");
        }
    }

    #[test]
    fn test_blank_description_rejected() {
        let err = form("Food", "   ", "Boston", "1")
            .validate()
            .expect_err("blank description should be rejected");
        assert_eq!(err.field, Field::Description);
    }

    #[test]
    fn test_blank_location_rejected() {
        let err = form("Food", "rice", "", "1")
            .validate()
            .expect_err("blank location should be rejected");
        assert_eq!(err.field, Field::Location);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = form("", "rice", "Boston", "1")
            .validate()
            .expect_err("missing category should be rejected");
        assert_eq!(err.field, Field::Category);
    }

    #[test]
    fn test_donation_serializes_with_source() {
        let donation = form("Furniture", "desk", "Boston", "1")
            .validate()
            .unwrap_or_else(|e| panic!("{e}"));
        let value = serde_json::to_value(&donation).unwrap_or_default();
        assert_eq!(value["category"], "Furniture");
        assert_eq!(value["source"], "customer");
    }
}
