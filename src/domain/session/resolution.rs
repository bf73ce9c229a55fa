//! Outcome of resolving the current user

use crate::domain::user::AuthUser;

/// Where a resolved identity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// The persisted slot
    Storage,
    /// The issuing endpoint. Not persisted by the read.
    Issuer,
}

/// Why the current user could not be determined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The slot holds something that is not a session record
    CorruptRecord(String),
    /// The slot could not be read
    Storage(String),
    /// The issuing endpoint was unreachable or answered unexpectedly
    IssuerUnavailable(String),
}

impl std::fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CorruptRecord(msg) => write!(f, "corrupt session record: {}", msg),
            Self::Storage(msg) => write!(f, "session storage unavailable: {}", msg),
            Self::IssuerUnavailable(msg) => write!(f, "issuer unavailable: {}", msg),
        }
    }
}

/// Result of `resolve_current_user`.
///
/// Distinguishes a known user, a known absence of one, and a fault, so the
/// caller decides whether placeholder content is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResolution {
    Resolved {
        user: AuthUser,
        source: SessionSource,
    },
    Anonymous,
    Unresolved(UnresolvedReason),
}

impl SessionResolution {
    pub fn resolved(user: AuthUser, source: SessionSource) -> Self {
        Self::Resolved { user, source }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::Resolved { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<SessionSource> {
        match self {
            Self::Resolved { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// Identity to display: the resolved user, else the placeholder when
    /// `allow_placeholder` is set.
    pub fn into_display_user(self, allow_placeholder: bool) -> Option<AuthUser> {
        match self {
            Self::Resolved { user, .. } => Some(user),
            Self::Anonymous | Self::Unresolved(_) if allow_placeholder => {
                Some(AuthUser::placeholder())
            }
            Self::Anonymous | Self::Unresolved(_) => None,
        }
    }
}
