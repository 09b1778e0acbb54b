//! # Data Models
//!
//! This module contains the SeaORM entities and request/response shapes used
//! throughout the Marketplace API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod category;
pub mod dto;
pub mod provider_profile;
pub mod provider_service;

pub use category::ServiceCategory;
pub use provider_profile::Entity as ProviderProfile;
pub use provider_service::Entity as ProviderService;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "marketplace".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
