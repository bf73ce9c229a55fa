//! Persisted slot trait

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Storage for the single session slot.
///
/// The slot holds at most one serialized record. Implementations store the
/// raw text as given; decoding is left to the caller so that a corrupt
/// record can be told apart from a missing one.
#[async_trait]
pub trait SessionRepository: Send + Sync + Debug {
    /// Read the raw record, `None` if the slot is empty
    async fn read(&self) -> Result<Option<String>, DomainError>;

    /// Replace the slot contents
    async fn write(&self, raw: &str) -> Result<(), DomainError>;

    /// Empty the slot. Clearing an empty slot is not an error.
    async fn clear(&self) -> Result<(), DomainError>;

    /// Check whether the slot holds anything
    async fn is_occupied(&self) -> Result<bool, DomainError> {
        Ok(self.read().await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// Mock session repository for testing
    #[derive(Debug, Default)]
    pub struct MockSessionRepository {
        slot: Arc<RwLock<Option<String>>>,
        should_fail: Arc<RwLock<bool>>,
        reads: AtomicUsize,
    }

    impl MockSessionRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a repository whose slot already holds `raw`
        pub fn with_raw(raw: impl Into<String>) -> Self {
            Self {
                slot: Arc::new(RwLock::new(Some(raw.into()))),
                ..Self::default()
            }
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Number of reads issued so far
        pub fn read_count(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }

        pub async fn raw(&self) -> Option<String> {
            self.slot.read().await.clone()
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn read(&self) -> Result<Option<String>, DomainError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.check_should_fail().await?;
            Ok(self.slot.read().await.clone())
        }

        async fn write(&self, raw: &str) -> Result<(), DomainError> {
            self.check_should_fail().await?;
            *self.slot.write().await = Some(raw.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.check_should_fail().await?;
            *self.slot.write().await = None;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_write_replaces_previous_value() {
            let repo = MockSessionRepository::new();

            repo.write("first").await.unwrap();
            repo.write("second").await.unwrap();

            assert_eq!(repo.read().await.unwrap().as_deref(), Some("second"));
        }

        #[tokio::test]
        async fn test_clear_empty_slot() {
            let repo = MockSessionRepository::new();
            repo.clear().await.unwrap();
            assert!(!repo.is_occupied().await.unwrap());
        }

        #[tokio::test]
        async fn test_failure_mode() {
            let repo = MockSessionRepository::with_raw("x");
            repo.set_should_fail(true).await;

            assert!(repo.read().await.is_err());
            assert!(repo.clear().await.is_err());
            assert_eq!(repo.raw().await.as_deref(), Some("x"));
            assert_eq!(repo.read_count(), 1);
        }
    }
}
