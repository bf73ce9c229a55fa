//! Facility entity

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Kind of waste facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    #[serde(rename = "Recycling Center")]
    RecyclingCenter,
    #[serde(rename = "Composting Unit")]
    CompostingUnit,
    #[serde(rename = "Waste Treatment")]
    WasteTreatment,
    #[serde(rename = "Collection Point")]
    CollectionPoint,
}

impl FacilityType {
    pub const ALL: [FacilityType; 4] = [
        FacilityType::RecyclingCenter,
        FacilityType::CompostingUnit,
        FacilityType::WasteTreatment,
        FacilityType::CollectionPoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecyclingCenter => "Recycling Center",
            Self::CompostingUnit => "Composting Unit",
            Self::WasteTreatment => "Waste Treatment",
            Self::CollectionPoint => "Collection Point",
        }
    }
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FacilityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("Unknown facility type '{}'", s)))
    }
}

/// Operating status reported by a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityStatus {
    Open,
    Closed,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    pub distance: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub status: FacilityStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_type_parse() {
        assert_eq!(
            "composting unit".parse::<FacilityType>().unwrap(),
            FacilityType::CompostingUnit
        );
        assert!("Landfill".parse::<FacilityType>().is_err());
    }

    #[test]
    fn test_facility_deserialize() {
        let raw = serde_json::json!({
            "id": 4,
            "name": "Local Collection Point",
            "type": "Collection Point",
            "distance": "0.3 km",
            "address": "Main Market Road",
            "phone": "+91 98765 43213",
            "hours": "6:00 AM - 10:00 PM",
            "status": "Full"
        });

        let facility: Facility = serde_json::from_value(raw).unwrap();
        assert_eq!(facility.facility_type, FacilityType::CollectionPoint);
        assert_eq!(facility.status, FacilityStatus::Full);
    }
}
