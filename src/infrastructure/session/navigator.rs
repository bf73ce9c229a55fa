//! Navigator used outside a browser

use std::sync::Mutex;
use tracing::info;

use crate::domain::Navigator;

/// Logs the redirect and remembers the last destination so the caller can
/// hand it to whatever opens URLs.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    last: Mutex<Option<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_redirect(&self) -> Option<String> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) {
        info!(url = %url, "Redirecting");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(url.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_last_redirect() {
        let navigator = RecordingNavigator::new();
        assert!(navigator.last_redirect().is_none());

        navigator.redirect("http://localhost:3000");
        navigator.redirect("https://auth.city.gov");
        assert_eq!(
            navigator.last_redirect().as_deref(),
            Some("https://auth.city.gov")
        );
    }
}
