//! Session domain
//!
//! Contracts for resolving and persisting the signed-in user across
//! separately deployed front-ends: the persisted slot, the issuing endpoint
//! and the redirect performed on logout.

mod events;
mod issuer;
mod navigator;
mod repository;
mod resolution;
mod token;

pub use events::SessionEvent;
pub use issuer::IdentityIssuer;
pub use navigator::Navigator;
pub use repository::SessionRepository;
pub use resolution::{SessionResolution, SessionSource, UnresolvedReason};
pub use token::TokenProvider;

#[cfg(test)]
pub use issuer::MockIdentityIssuer;
#[cfg(test)]
pub use repository::mock::MockSessionRepository;
