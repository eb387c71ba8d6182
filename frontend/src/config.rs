//! Application configuration.
//!
//! Centralized configuration for the Mailroom frontend.
//! In development, these are hardcoded. Widgets that talk to the backend
//! take an [`UploaderConfig`] so the destination can be swapped per instance.

use serde::{Deserialize, Serialize};

/// Backend API base URL.
///
/// The email processing service.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Path of the processing endpoint on the backend.
pub const PROCESS_EMAIL_PATH: &str = "/process-email";

/// Application name, used as the page title.
pub const APP_NAME: &str = "Mailroom";

/// Maximum number of files accepted per drop or selection.
pub const MAX_FILES: usize = 1;

/// Where an uploader sends its files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderConfig {
    /// Full URL of the multipart upload endpoint.
    pub endpoint: String,
}

impl UploaderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Build a config from a backend base URL, appending the processing path.
    pub fn for_backend(base_url: &str) -> Self {
        Self::new(format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            PROCESS_EMAIL_PATH
        ))
    }
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self::for_backend(BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(
            UploaderConfig::default().endpoint,
            "http://localhost:8000/process-email"
        );
    }

    #[test]
    fn test_for_backend_trims_trailing_slash() {
        let config = UploaderConfig::for_backend("https://mail.example.org/");
        assert_eq!(config.endpoint, "https://mail.example.org/process-email");
    }

    #[test]
    fn test_config_deserialization() {
        let config: UploaderConfig =
            serde_json::from_str(r#"{"endpoint": "http://127.0.0.1:9000/upload"}"#).unwrap();
        assert_eq!(config, UploaderConfig::new("http://127.0.0.1:9000/upload"));
    }
}
