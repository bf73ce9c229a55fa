//! Domain layer - Core business logic and entities

pub mod error;
pub mod facility;
pub mod request;
pub mod session;
pub mod user;

pub use error::DomainError;
pub use facility::{filter_facilities, Facility, FacilityFilter, FacilityStatus, FacilityType};
pub use request::{DumpingReport, ImageAttachment, PickupRequest, PurchaseRequest};
pub use session::{
    IdentityIssuer, Navigator, SessionEvent, SessionRepository, SessionResolution, SessionSource,
    TokenProvider, UnresolvedReason,
};
pub use user::{
    validate_credentials, AuthMode, AuthUser, CredentialField, Credentials, Role,
    ValidationErrors,
};
