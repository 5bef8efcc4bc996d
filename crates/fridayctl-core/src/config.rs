//! Assistant connection settings.
//!
//! The CLI resolves its TOML/env/flag layers into this type; core never
//! sees where the values came from.

use std::time::Duration;

use url::Url;

/// Connection settings for one friday device.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Device base URL, e.g. `http://friday.local:8000`.
    pub url: Url,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl AssistantConfig {
    /// Config with the default timeout.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
