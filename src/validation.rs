//! Field validation for inbound provider payloads
//!
//! Pure checks over in-memory values; nothing here touches storage. Each
//! function either produces a `Validated*` value the repositories accept, or
//! fails fast with the first offending field. Category membership never
//! reaches this layer: the typed [`ServiceCategory`] enum rejects out-of-set
//! values during JSON extraction.

use thiserror::Error;

use crate::models::ServiceCategory;
use crate::models::dto::{CreateProviderProfileDto, CreateServiceItemDto, UpdateProviderProfileDto};

/// Upper bound for single-line text fields (name, phone, address)
pub const MAX_TEXT_LEN: usize = 255;

/// Upper bound for free-text descriptions
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Caller-supplied data violated a field constraint; always recoverable by
/// correcting the input. Exactly one field is reported per failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for field '{field}': {message}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable description of the constraint that failed
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Profile fields that passed validation, ready for repository insertion
#[derive(Debug, Clone)]
pub struct ValidatedProfile {
    pub user_id: String,
    pub business_name: String,
    pub category: ServiceCategory,
    pub phone: String,
    pub address: String,
}

/// Service item fields that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedService {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
}

/// Validated sparse patch; `None` fields leave the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub business_name: Option<String>,
    pub category: Option<ServiceCategory>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ProfilePatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.business_name.is_none()
            && self.category.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::new(
            field,
            format!("must not exceed {} characters", MAX_TEXT_LEN),
        ));
    }
    Ok(())
}

/// Validates a profile registration payload
pub fn validate_create_profile(
    dto: &CreateProviderProfileDto,
) -> Result<ValidatedProfile, ValidationError> {
    require_text("user_id", &dto.user_id)?;
    require_text("business_name", &dto.business_name)?;
    require_text("phone", &dto.phone)?;
    require_text("address", &dto.address)?;

    Ok(ValidatedProfile {
        user_id: dto.user_id.clone(),
        business_name: dto.business_name.clone(),
        category: dto.category,
        phone: dto.phone.clone(),
        address: dto.address.clone(),
    })
}

/// Validates a catalog line item payload
pub fn validate_create_service(
    dto: &CreateServiceItemDto,
) -> Result<ValidatedService, ValidationError> {
    require_text("name", &dto.name)?;

    if dto.price < 0 {
        return Err(ValidationError::new("price", "must not be negative"));
    }

    if let Some(description) = &dto.description
        && description.len() > MAX_DESCRIPTION_LEN
    {
        return Err(ValidationError::new(
            "description",
            format!("must not exceed {} characters", MAX_DESCRIPTION_LEN),
        ));
    }

    Ok(ValidatedService {
        name: dto.name.clone(),
        price: dto.price,
        description: dto.description.clone(),
    })
}

/// Validates a sparse profile patch; each present field is checked with the
/// same constraints as creation, failing fast on the first invalid one
pub fn validate_update_profile(
    dto: &UpdateProviderProfileDto,
) -> Result<ProfilePatch, ValidationError> {
    if let Some(business_name) = &dto.business_name {
        require_text("business_name", business_name)?;
    }
    if let Some(phone) = &dto.phone {
        require_text("phone", phone)?;
    }
    if let Some(address) = &dto.address {
        require_text("address", address)?;
    }

    let patch = ProfilePatch {
        business_name: dto.business_name.clone(),
        category: dto.category,
        phone: dto.phone.clone(),
        address: dto.address.clone(),
    };

    if patch.is_empty() {
        return Err(ValidationError::new(
            "body",
            "at least one field must be provided",
        ));
    }

    Ok(patch)
}
