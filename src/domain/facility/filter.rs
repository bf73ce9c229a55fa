//! Category filter applied to facility listings

use super::entity::{Facility, FacilityType};
use crate::domain::DomainError;

/// Category selection: everything, or one facility type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacilityFilter {
    #[default]
    All,
    Only(FacilityType),
}

impl FacilityFilter {
    pub fn matches(&self, facility: &Facility) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => facility.facility_type == *t,
        }
    }
}

impl std::str::FromStr for FacilityFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

/// Keep the facilities matching `filter`, preserving order
pub fn filter_facilities<'a>(
    facilities: &'a [Facility],
    filter: FacilityFilter,
) -> Vec<&'a Facility> {
    facilities.iter().filter(|f| filter.matches(f)).collect()
}
