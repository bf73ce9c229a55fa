use chrono::{DateTime, Utc};

/// Change notification published whenever the persisted slot is written or cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn {
        user_id: String,
        at: DateTime<Utc>,
    },
    SignedOut {
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self::SignedIn {
            user_id: user_id.into(),
            at: Utc::now(),
        }
    }

    pub fn signed_out() -> Self {
        Self::SignedOut { at: Utc::now() }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}
