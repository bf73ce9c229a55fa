//! HTTP client for the issuing app's "who am I" endpoint

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::{AuthUser, DomainError, IdentityIssuer};

#[derive(Debug, Clone)]
pub struct HttpIdentityIssuer {
    client: Client,
    origin: String,
    url: String,
    cookie: Option<String>,
}

impl HttpIdentityIssuer {
    pub fn new(
        origin: impl Into<String>,
        path: &str,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let origin = origin.into();
        let url = format!("{}{}", origin.trim_end_matches('/'), path);
        Self::with_url(origin, url, timeout)
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, DomainError> {
        let issuer = Self::with_url(
            config.issuer_origin.clone(),
            config.issuer_url(),
            config.issuer_timeout(),
        )?;

        Ok(match &config.session_cookie {
            Some(cookie) => issuer.with_cookie(cookie.clone()),
            None => issuer,
        })
    }

    fn with_url(origin: String, url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            origin,
            url,
            cookie: None,
        })
    }

    /// Send `cookie` as the request credential
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IdentityIssuer for HttpIdentityIssuer {
    async fn fetch_current_user(&self) -> Result<Option<AuthUser>, DomainError> {
        let mut request = self
            .client
            .get(&self.url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Issuer request failed: {}", e)))?;

        let status = response.status();
        debug!(url = %self.url, status = status.as_u16(), "Issuer responded");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(DomainError::issuer(format!("HTTP {}", status)));
        }

        response
            .json::<AuthUser>()
            .await
            .map(Some)
            .map_err(|e| DomainError::issuer(format!("Failed to parse issuer response: {}", e)))
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }
}
