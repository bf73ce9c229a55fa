//! Session service wiring from configuration

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::domain::{DomainError, Navigator};

use super::{FileSessionRepository, HttpIdentityIssuer, SessionService};

/// File-backed slot plus HTTP issuer, as configured
pub fn create_session_service(
    config: &SessionConfig,
    navigator: Arc<dyn Navigator>,
) -> Result<SessionService, DomainError> {
    let repository = FileSessionRepository::new(&config.storage_dir, &config.slot_key);
    let issuer = HttpIdentityIssuer::from_config(config)?;

    Ok(
        SessionService::new(Arc::new(repository), Arc::new(issuer), navigator)
            .with_fallback_identity(config.fallback_identity),
    )
}
