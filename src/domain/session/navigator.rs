//! Navigation side effect

/// Moves the user agent to another application.
///
/// Called by logout. Once invoked the navigation cannot be cancelled.
pub trait Navigator: Send + Sync {
    fn redirect(&self, url: &str);
}
