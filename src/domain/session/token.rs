use async_trait::async_trait;

/// Supplies the bearer token attached to API requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn auth_token(&self) -> Option<String>;
}
