//! User domain
//!
//! Identity types shared by the issuing app and the dashboard, and the
//! validation applied to login/signup submissions.

mod entity;
mod validation;

pub use entity::{AuthMode, AuthUser, Role};
pub use validation::{
    validate_credentials, CredentialField, Credentials, UserValidationError, ValidationErrors,
};
