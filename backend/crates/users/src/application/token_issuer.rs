//! Token Issuer
//!
//! Session tokens go back to the client after registration; service tokens
//! authenticate this service to the Profile Service. Neither is stored.

use std::sync::Arc;

use platform::token::{self, Signed, TokenError};
use serde::{Deserialize, Serialize};

use crate::application::config::UsersConfig;
use crate::domain::entity::user::User;

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// Service tokens carry no identity, only `iat`/`exp`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceClaims {}

#[derive(Clone)]
pub struct TokenIssuer {
    config: Arc<UsersConfig>,
}

impl TokenIssuer {
    pub fn new(config: Arc<UsersConfig>) -> Self {
        Self { config }
    }

    /// Sign a session token for `user`, valid for `session_ttl`
    pub fn issue_session(&self, user: &User) -> Result<String, TokenError> {
        let claims = SessionClaims {
            id: user.user_id.to_string(),
            email: user.email.to_string(),
            username: user.user_name.to_string(),
        };

        token::sign(claims, &self.config.token_secret, self.config.session_ttl)
    }

    /// Mint a fresh service-to-service token
    pub fn issue_service(&self) -> Result<String, TokenError> {
        token::sign(
            ServiceClaims::default(),
            &self.config.token_secret,
            self.config.service_token_ttl,
        )
    }

    /// Check a session token. No route here requires one; this is what
    /// a protected route would call.
    pub fn verify_session(&self, session_token: &str) -> Result<Signed<SessionClaims>, TokenError> {
        token::verify(session_token, &self.config.token_secret)
    }
}
