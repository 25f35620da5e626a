//! Application Configuration
//!
//! Built once at startup and shared by reference with every handler.

use std::fmt;
use std::time::Duration;

use platform::http_client::HttpClientConfig;

/// Users application configuration
#[derive(Clone)]
pub struct UsersConfig {
    /// HMAC secret for session and service tokens
    pub token_secret: Vec<u8>,
    /// Session token lifetime (3 hours)
    pub session_ttl: Duration,
    /// Lifetime of the per-call service token sent to the Profile Service
    pub service_token_ttl: Duration,
    /// Profile Service base URL, without trailing slash
    pub profile_service_url: String,
    /// Timeouts for Profile Service calls
    pub profile_http: HttpClientConfig,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl UsersConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>, profile_service_url: impl Into<String>) -> Self {
        let url: String = profile_service_url.into();
        Self {
            token_secret: token_secret.into(),
            session_ttl: Duration::from_secs(3 * 3600), // 3 hours
            service_token_ttl: Duration::from_secs(60),
            profile_service_url: url.trim_end_matches('/').to_string(),
            profile_http: HttpClientConfig::default(),
            password_pepper: None,
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Absolute URL of a Profile Service path (`path` starts with `/`)
    pub fn profile_url(&self, path: &str) -> String {
        format!("{}{}", self.profile_service_url, path)
    }
}

impl fmt::Debug for UsersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsersConfig")
            .field("token_secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .field("service_token_ttl", &self.service_token_ttl)
            .field("profile_service_url", &self.profile_service_url)
            .field("profile_http", &self.profile_http)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UsersConfig::new("secret", "http://profiles:4000");
        assert_eq!(config.session_ttl, Duration::from_secs(10_800));
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_profile_url_strips_trailing_slash() {
        let config = UsersConfig::new("secret", "http://profiles:4000/");
        assert_eq!(config.profile_url("/profile"), "http://profiles:4000/profile");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = UsersConfig::new("top-secret-value", "http://profiles:4000");
        config.password_pepper = Some(b"pepper-value".to_vec());

        let debug = format!("{:?}", config);
        assert!(!debug.contains("top-secret-value"));
        assert!(!debug.contains("pepper-value"));
    }
}
