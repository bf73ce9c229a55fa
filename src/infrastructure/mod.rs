//! Infrastructure layer - External service implementations

pub mod logging;
pub mod session;
pub mod waste_api;
