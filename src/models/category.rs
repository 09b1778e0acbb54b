//! Provider business classification
//!
//! Closed set of categories a provider can register under. The enum is the
//! only path a category value can take into the system: JSON payloads outside
//! the set fail deserialization, and the database column round-trips through
//! the same variants.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Business classification of a service provider
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceCategory {
    /// Repair and maintenance workshop
    #[sea_orm(string_value = "GARAGE")]
    Garage,
    /// Vehicle transport and towing operator
    #[sea_orm(string_value = "CARRIER")]
    Carrier,
    /// Cleaning and detailing business
    #[sea_orm(string_value = "DETAILER")]
    Detailer,
}

impl ServiceCategory {
    /// Canonical wire spelling of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Garage => "GARAGE",
            Self::Carrier => "CARRIER",
            Self::Detailer => "DETAILER",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_uppercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&ServiceCategory::Garage).unwrap(),
            "\"GARAGE\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceCategory::Carrier).unwrap(),
            "\"CARRIER\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceCategory::Detailer).unwrap(),
            "\"DETAILER\""
        );
    }

    #[test]
    fn rejects_values_outside_the_closed_set() {
        assert!(serde_json::from_str::<ServiceCategory>("\"MECHANIC\"").is_err());
        assert!(serde_json::from_str::<ServiceCategory>("\"garage\"").is_err());
        assert!(serde_json::from_str::<ServiceCategory>("\"\"").is_err());
    }

    #[test]
    fn round_trips_through_serde() {
        for category in [
            ServiceCategory::Garage,
            ServiceCategory::Carrier,
            ServiceCategory::Detailer,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            let parsed: ServiceCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }
}
