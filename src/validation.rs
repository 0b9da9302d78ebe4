//! Input validation for portal forms.
//!
//! Operations validate locally before any network traffic; the backend
//! revalidates on its side.

use crate::models::RegistrationForm;
use crate::store::property::PropertyDraft;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    Required { field: String },

    #[error("Field '{field}' is too long (max {max} characters)")]
    TooLong { field: String, max: usize },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Team size must be between {min} and {max}")]
    TeamSizeOutOfRange { min: u32, max: u32 },

    #[error("At least one service must be offered")]
    NoServices,

    #[error("At least one image is required")]
    NoImages,
}

const MAX_FIELD_LEN: usize = 255;
const MIN_TEAM_SIZE: u32 = 1;
const MAX_TEAM_SIZE: u32 = 500;

/// Validate a cleaning-business registration before submission
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    require(&form.business_name, "business_name")?;
    require(&form.operator_name, "operator_name")?;
    require(&form.email, "email")?;
    require(&form.phone, "phone")?;
    require(&form.address, "address")?;
    require(&form.city, "city")?;

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if form.services_offered.is_empty() {
        return Err(ValidationError::NoServices);
    }
    if form.team_size < MIN_TEAM_SIZE || form.team_size > MAX_TEAM_SIZE {
        return Err(ValidationError::TeamSizeOutOfRange {
            min: MIN_TEAM_SIZE,
            max: MAX_TEAM_SIZE,
        });
    }
    Ok(())
}

/// Validate a property draft before it can leave the wizard
pub fn validate_property_draft(draft: &PropertyDraft) -> Result<(), ValidationError> {
    require(&draft.title, "title")?;
    if draft.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }
    if draft.images.is_empty() {
        return Err(ValidationError::NoImages);
    }
    Ok(())
}

fn require(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    if value.len() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= 7
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
}
