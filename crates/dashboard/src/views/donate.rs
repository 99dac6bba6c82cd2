//! Donation form view.

use recircle_core::{Category, DonationForm, ValidationError};

use crate::api::{ApiError, DonationAck};

/// Shown when the backend acknowledges without a message.
const DEFAULT_SUCCESS: &str = "Donation submitted successfully!";

/// The donation form with its current values and outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationFormView {
    pub form: DonationForm,
    pub categories: Vec<&'static str>,
    /// Field-level validation failure.
    pub invalid: Option<ValidationError>,
    /// Submission failure.
    pub error: Option<String>,
    /// Submission success message. The form is reset when set.
    pub success: Option<String>,
}

impl Default for DonationFormView {
    fn default() -> Self {
        Self {
            form: DonationForm::default(),
            categories: Category::ALL.iter().map(|c| c.label()).collect(),
            invalid: None,
            error: None,
            success: None,
        }
    }
}

impl DonationFormView {
    /// Fresh, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the entered values and flag the failing field.
    #[must_use]
    pub fn invalid(form: DonationForm, error: ValidationError) -> Self {
        Self {
            form,
            invalid: Some(error),
            ..Self::default()
        }
    }

    /// Keep the entered values and show why the submission failed.
    #[must_use]
    pub fn failed(form: DonationForm, error: &ApiError) -> Self {
        Self {
            form,
            error: Some(submission_error(error)),
            ..Self::default()
        }
    }

    /// Reset to defaults and show the success message.
    #[must_use]
    pub fn submitted(ack: &DonationAck) -> Self {
        let message = if ack.message.trim().is_empty() {
            DEFAULT_SUCCESS.to_string()
        } else {
            ack.message.clone()
        };
        Self {
            success: Some(message),
            ..Self::default()
        }
    }

    /// Validation message for `field`, if that field failed.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.invalid
            .as_ref()
            .filter(|e| e.field.name() == field)
            .map(|e| e.message)
    }

    #[must_use]
    pub fn is_selected(&self, category: &str) -> bool {
        self.form.category == category
    }
}

/// Message for a failed submission.
///
/// Backend validation rejections (400) carry their detail.
#[must_use]
pub fn submission_error(error: &ApiError) -> String {
    match error {
        ApiError::Status {
            status: 400,
            message,
        } => format!("Validation error: {message}"),
        other => format!("Failed to submit donation: {}", other.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recircle_core::donation::Field;

    fn entered() -> DonationForm {
        DonationForm {
            category: "Clothing".to_string(),
            description: "wool coat".to_string(),
            location: "Boston".to_string(),
            quantity: "0".to_string(),
        }
    }

    #[test]
    fn test_invalid_keeps_values_and_flags_field() {
        let err = entered().validate().err();
        let view = DonationFormView::invalid(entered(), err.unwrap_or_else(|| panic!("expected error")));
        assert_eq!(view.form, entered());
        assert_eq!(view.error_for(Field::Quantity.name()), Some("Quantity must be greater than 0"));
        assert_eq!(view.error_for("description"), None);
    }

    #[test]
    fn test_submitted_resets_form() {
        let view = DonationFormView::submitted(&DonationAck {
            success: true,
            message: String::new(),
            donation_id: Some(9),
        });
        assert_eq!(view.form, DonationForm::default());
        assert_eq!(view.success.as_deref(), Some(DEFAULT_SUCCESS));
    }

    #[test]
    fn test_backend_validation_error_prefixed() {
        let err = ApiError::Status {
            status: 400,
            message: "Invalid category".to_string(),
        };
        assert_eq!(submission_error(&err), "Validation error: Invalid category");

        let view = DonationFormView::failed(entered(), &err);
        assert_eq!(view.form, entered());
        assert!(view.success.is_none());
    }

    #[test]
    fn test_server_error_message() {
        let err = ApiError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(
            submission_error(&err),
            "Failed to submit donation: Internal Server Error"
        );
    }
}
