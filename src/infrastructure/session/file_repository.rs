//! File-backed session slot
//!
//! The slot is a single JSON file shared by every process pointed at the same
//! directory, which is how independently started apps see one session.

use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{DomainError, SessionRepository};

#[derive(Debug, Clone)]
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    /// Slot stored at `<dir>/<key>.json`
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn read(&self) -> Result<Option<String>, DomainError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to read session slot {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write(&self, raw: &str) -> Result<(), DomainError> {
        let dir = self.directory();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to create session directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        // Each write gets its own temp file in the slot's directory, then
        // replaces the slot by rename, so concurrent writers never share
        // a staging file and readers never see a partial record.
        let path = self.path.clone();
        let raw = raw.to_string();
        tokio::task::spawn_blocking(move || -> Result<(), DomainError> {
            let mut staged = tempfile::NamedTempFile::new_in(&dir).map_err(|e| {
                DomainError::storage(format!("Failed to stage session slot: {}", e))
            })?;
            staged
                .write_all(raw.as_bytes())
                .map_err(|e| DomainError::storage(format!("Failed to write session slot: {}", e)))?;
            staged.persist(&path).map_err(|e| {
                DomainError::storage(format!("Failed to replace session slot: {}", e.error))
            })?;
            Ok(())
        })
        .await
        .map_err(|e| DomainError::internal(format!("Session write task failed: {}", e)))??;

        debug!(path = %self.path.display(), "Session slot written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session slot cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to clear session slot {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path(), "auth_user");

        assert!(repo.read().await.unwrap().is_none());
        assert!(repo.path().ends_with("auth_user.json"));
    }

    #[tokio::test]
    async fn test_write_read_clear() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path().join("nested"), "auth_user");

        repo.write("one").await.unwrap();
        repo.write("two").await.unwrap();
        assert_eq!(repo.read().await.unwrap().as_deref(), Some("two"));
        assert_eq!(std::fs::read_dir(dir.path().join("nested")).unwrap().count(), 1);

        repo.clear().await.unwrap();
        assert!(repo.read().await.unwrap().is_none());
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_two_handles_share_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let issuer_app = FileSessionRepository::new(dir.path(), "auth_user");
        let dashboard = FileSessionRepository::new(dir.path(), "auth_user");

        issuer_app.write("record").await.unwrap();
        assert_eq!(dashboard.read().await.unwrap().as_deref(), Some("record"));
    }

    #[tokio::test]
    async fn test_concurrent_writers_leave_one_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut writers = Vec::new();

        for i in 0..8 {
            let repo = FileSessionRepository::new(dir.path(), "auth_user");
            writers.push(tokio::spawn(async move {
                repo.write(&format!("record-{}", i)).await
            }));
        }
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        let repo = FileSessionRepository::new(dir.path(), "auth_user");
        let stored = repo.read().await.unwrap().unwrap();
        assert!((0..8).any(|i| stored == format!("record-{}", i)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_slot_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read as text
        std::fs::create_dir(dir.path().join("auth_user.json")).unwrap();
        let repo = FileSessionRepository::new(dir.path(), "auth_user");

        let err = repo.read().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }
}
