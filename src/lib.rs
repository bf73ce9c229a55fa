//! Waste portal session core
//!
//! The logic shared by the portal's separately deployed front-ends:
//! - Login/signup credential validation
//! - Session hand-off through a single persisted slot, with issuer and
//!   placeholder fallbacks
//! - A typed client for the waste-management backend

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    validate_credentials, AuthUser, Credentials, DomainError, Role, SessionResolution,
    ValidationErrors,
};
pub use infrastructure::session::SessionService;
pub use infrastructure::waste_api::WasteApiClient;
