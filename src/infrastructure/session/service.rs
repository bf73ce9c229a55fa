//! Session service: resolves, stores and ends the current session

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::domain::{
    AuthUser, DomainError, IdentityIssuer, Navigator, SessionEvent, SessionRepository,
    SessionResolution, SessionSource, TokenProvider, UnresolvedReason,
};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Owns every write to the persisted slot.
///
/// State is keyed solely by slot presence: a stored record means
/// authenticated, an empty slot means anonymous. Resolving through the issuer
/// or the placeholder never changes that state.
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    issuer: Arc<dyn IdentityIssuer>,
    navigator: Arc<dyn Navigator>,
    fallback_identity: bool,
    events: broadcast::Sender<SessionEvent>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("repository", &self.repository)
            .field("fallback_identity", &self.fallback_identity)
            .finish_non_exhaustive()
    }
}

impl SessionService {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        issuer: Arc<dyn IdentityIssuer>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            repository,
            issuer,
            navigator,
            fallback_identity: true,
            events,
        }
    }

    /// Whether `get_current_user` substitutes the placeholder identity
    pub fn with_fallback_identity(mut self, enabled: bool) -> Self {
        self.fallback_identity = enabled;
        self
    }

    /// Receive `SignedIn`/`SignedOut` notifications
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Resolve who the current user is.
    ///
    /// The slot is consulted first; the issuer only when the slot is empty.
    /// A corrupt slot is reported as such and does not reach the issuer.
    /// Faults are folded into the result, never returned as errors.
    pub async fn resolve_current_user(&self) -> SessionResolution {
        match self.repository.read().await {
            Ok(Some(raw)) => {
                return match serde_json::from_str::<AuthUser>(&raw) {
                    Ok(user) => {
                        debug!(user_id = %user.id, "Session resolved from storage");
                        SessionResolution::resolved(user, SessionSource::Storage)
                    }
                    Err(e) => {
                        warn!(error = %e, "Stored session record is corrupt");
                        SessionResolution::Unresolved(UnresolvedReason::CorruptRecord(
                            e.to_string(),
                        ))
                    }
                };
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Session storage unavailable");
                return SessionResolution::Unresolved(UnresolvedReason::Storage(e.to_string()));
            }
        }

        match self.issuer.fetch_current_user().await {
            Ok(Some(user)) => {
                debug!(user_id = %user.id, "Session resolved from issuer");
                SessionResolution::resolved(user, SessionSource::Issuer)
            }
            Ok(None) => {
                debug!("Issuer reports no signed-in user");
                SessionResolution::Anonymous
            }
            Err(e) => {
                warn!(error = %e, "Issuer not available");
                SessionResolution::Unresolved(UnresolvedReason::IssuerUnavailable(e.to_string()))
            }
        }
    }

    /// Identity to display. Falls back to the placeholder when enabled and
    /// nothing resolves; never fails.
    pub async fn get_current_user(&self) -> Option<AuthUser> {
        let resolution = self.resolve_current_user().await;
        if !resolution.is_resolved() && self.fallback_identity {
            debug!("Using placeholder identity");
        }
        resolution.into_display_user(self.fallback_identity)
    }

    /// Slot presence only; a stale or malformed record still counts
    pub async fn is_authenticated(&self) -> bool {
        match self.repository.is_occupied().await {
            Ok(occupied) => occupied,
            Err(e) => {
                warn!(error = %e, "Session storage unavailable");
                false
            }
        }
    }

    /// Replace the stored session with `user`. Last write wins.
    pub async fn save_user_data(&self, user: &AuthUser) -> Result<(), DomainError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| DomainError::serialization(format!("Failed to encode session: {}", e)))?;
        self.repository.write(&raw).await?;

        info!(user_id = %user.id, role = %user.role, "Session saved");
        let _ = self.events.send(SessionEvent::signed_in(user.id.clone()));
        Ok(())
    }

    /// Clear the slot and send the user back to the issuing app.
    ///
    /// The redirect happens even if clearing fails; the clear error is
    /// returned afterwards. `SignedOut` is only published once the slot is
    /// actually empty.
    pub async fn logout(&self) -> Result<(), DomainError> {
        let cleared = self.repository.clear().await;
        if let Err(e) = &cleared {
            warn!(error = %e, "Failed to clear session slot");
        }

        let origin = self.issuer.origin();
        info!(redirect = %origin, "Logging out");
        self.navigator.redirect(&origin);

        if cleared.is_ok() {
            let _ = self.events.send(SessionEvent::signed_out());
        }
        cleared
    }

    /// Token of the stored session, if any
    pub async fn get_auth_token(&self) -> Option<String> {
        let raw = match self.repository.read().await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Session storage unavailable");
                return None;
            }
        };

        match serde_json::from_str::<AuthUser>(&raw) {
            Ok(user) => user.token,
            Err(e) => {
                warn!(error = %e, "Stored session record is corrupt");
                None
            }
        }
    }
}

#[async_trait]
impl TokenProvider for SessionService {
    async fn auth_token(&self) -> Option<String> {
        self.get_auth_token().await
    }
}
