//! Profile Service over HTTP
//!
//! - `POST {base}/profile` with `{userId, bio, interests}`
//! - `GET {base}/profile/{userId}`
//!
//! Every call carries a freshly minted service token as a bearer credential.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::config::UsersConfig;
use crate::application::token_issuer::TokenIssuer;
use crate::domain::entity::profile::Profile;
use crate::domain::profile_service::{ProfileService, ProfileServiceError};
use crate::domain::value_object::user_id::UserId;

#[derive(Clone)]
pub struct HttpProfileService {
    client: reqwest::Client,
    config: Arc<UsersConfig>,
    tokens: TokenIssuer,
}

impl HttpProfileService {
    /// `client` should already carry the timeouts from `config.profile_http`
    pub fn new(client: reqwest::Client, config: Arc<UsersConfig>) -> Self {
        Self {
            client,
            tokens: TokenIssuer::new(config.clone()),
            config,
        }
    }

    fn service_token(&self) -> Result<String, ProfileServiceError> {
        self.tokens
            .issue_service()
            .map_err(|e| ProfileServiceError::Token(e.to_string()))
    }
}

impl From<reqwest::Error> for ProfileServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProfileServiceError::Timeout
        } else if err.is_decode() {
            ProfileServiceError::InvalidBody(err.to_string())
        } else {
            ProfileServiceError::Transport(err.to_string())
        }
    }
}

impl ProfileService for HttpProfileService {
    #[tracing::instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn forward(&self, profile: &Profile) -> Result<(), ProfileServiceError> {
        let response = self
            .client
            .post(self.config.profile_url("/profile"))
            .bearer_auth(self.service_token()?)
            .json(&profile.to_payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileServiceError::Status(status.as_u16()));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user_id = %user_id))]
    async fn fetch(&self, user_id: &UserId) -> Result<Map<String, Value>, ProfileServiceError> {
        let response = self
            .client
            .get(self.config.profile_url(&format!("/profile/{user_id}")))
            .bearer_auth(self.service_token()?)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProfileServiceError::NotFound);
        }
        if !status.is_success() {
            return Err(ProfileServiceError::Status(status.as_u16()));
        }

        match response.json::<Value>().await? {
            Value::Object(map) => Ok(map),
            other => Err(ProfileServiceError::InvalidBody(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}
