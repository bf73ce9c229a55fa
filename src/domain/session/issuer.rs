//! Issuing endpoint trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::user::AuthUser;
use crate::domain::DomainError;

/// The service that authenticates credentials and mints session records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityIssuer: Send + Sync {
    /// Ask the issuer who the current user is.
    ///
    /// `Ok(None)` means the issuer answered and there is no signed-in user.
    /// Transport failures, unexpected statuses and undecodable bodies are
    /// errors.
    async fn fetch_current_user(&self) -> Result<Option<AuthUser>, DomainError>;

    /// Origin of the issuing application, used as the logout destination
    fn origin(&self) -> String;
}
