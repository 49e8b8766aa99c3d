use std::time::Duration;

use url::Url;

/// Connection settings for a Canvas instance.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// ex. https://canvas.example.edu
    pub base_url: Url,

    pub access_token: Option<String>,

    // None waits for the fetches as long as they take
    pub timeout: Option<Duration>,
}

impl CanvasConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            access_token: None,
            timeout: None,
        }
    }

    pub fn with_access_token<T>(mut self, access_token: T) -> Self
    where
        T: Into<String>,
    {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
