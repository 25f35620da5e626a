//! Outbound HTTP Client
//!
//! One `reqwest::Client` per process. It pools connections internally and
//! is cheap to clone into handler state.

use std::time::Duration;

/// Timeouts applied to every outbound request
#[derive(Debug, Clone, Copy)]
pub struct HttpClientConfig {
    /// Whole-request deadline (connect + send + read body)
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

/// Build the shared client
pub fn build_client(config: &HttpClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(concat!("users-service/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_client() {
        assert!(build_client(&HttpClientConfig::default()).is_ok());
    }
}
