use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where the session slot lives and how the issuing app is reached
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the persisted slot file
    pub storage_dir: PathBuf,
    /// Name of the slot, shared by every app reading the session
    pub slot_key: String,
    /// Origin of the issuing app; also the logout destination
    pub issuer_origin: String,
    /// Path of the "who am I" endpoint on the issuer
    pub issuer_path: String,
    pub issuer_timeout_secs: u64,
    /// Cookie forwarded to the issuer as the request credential
    pub session_cookie: Option<String>,
    /// Return the placeholder identity when no session resolves
    pub fallback_identity: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".waste-portal"),
            slot_key: "auth_user".to_string(),
            issuer_origin: "http://localhost:3000".to_string(),
            issuer_path: "/api/auth/me".to_string(),
            issuer_timeout_secs: 5,
            session_cookie: None,
            fallback_identity: true,
        }
    }
}

impl SessionConfig {
    /// Full URL of the issuer's "who am I" endpoint
    pub fn issuer_url(&self) -> String {
        format!(
            "{}{}",
            self.issuer_origin.trim_end_matches('/'),
            self.issuer_path
        )
    }

    pub fn issuer_timeout(&self) -> Duration {
        Duration::from_secs(self.issuer_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.slot_key, "auth_user");
        assert_eq!(config.session.issuer_url(), "http://localhost:3000/api/auth/me");
        assert!(config.session.fallback_identity);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_issuer_url_trims_trailing_slash() {
        let session = SessionConfig {
            issuer_origin: "https://auth.city.gov/".to_string(),
            ..SessionConfig::default()
        };
        assert_eq!(session.issuer_url(), "https://auth.city.gov/api/auth/me");
    }

    #[test]
    fn test_partial_sources_fill_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("api.base_url", "https://api.city.gov")
            .unwrap()
            .set_override("session.fallback_identity", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.base_url, "https://api.city.gov");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(!config.session.fallback_identity);
        assert_eq!(config.logging.level, "info");
    }
}
