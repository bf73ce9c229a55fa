//! In-memory session slot

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{DomainError, SessionRepository};

/// Process-local slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn read(&self) -> Result<Option<String>, DomainError> {
        Ok(self.slot.read().await.clone())
    }

    async fn write(&self, raw: &str) -> Result<(), DomainError> {
        *self.slot.write().await = Some(raw.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.slot.write().await.take();
        Ok(())
    }
}
