//! Waste facility domain

mod entity;
mod filter;

pub use entity::{Facility, FacilityStatus, FacilityType};
pub use filter::{filter_facilities, FacilityFilter};
