//! Session infrastructure
//!
//! Slot storage backends, the HTTP issuer client, and the service that ties
//! them together.

mod factory;
mod file_repository;
mod in_memory;
mod issuer_client;
mod navigator;
mod service;

pub use factory::create_session_service;
pub use file_repository::FileSessionRepository;
pub use in_memory::InMemorySessionRepository;
pub use issuer_client::HttpIdentityIssuer;
pub use navigator::RecordingNavigator;
pub use service::SessionService;
