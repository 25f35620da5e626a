//! Profile Service Port
//!
//! The external service that owns `bio`/`interests`. Implementation is in
//! `infra::profile_http`.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::entity::profile::Profile;
use crate::domain::value_object::user_id::UserId;

#[derive(Debug, Error)]
pub enum ProfileServiceError {
    /// The service has no profile for this user
    #[error("Profile not found")]
    NotFound,

    /// Non-2xx response other than 404
    #[error("Profile service responded with status {0}")]
    Status(u16),

    #[error("Profile service request timed out")]
    Timeout,

    #[error("Profile service unreachable: {0}")]
    Transport(String),

    /// 2xx response whose body is not a JSON object
    #[error("Profile service returned an invalid body: {0}")]
    InvalidBody(String),

    #[error("Could not mint service token: {0}")]
    Token(String),
}

#[trait_variant::make(ProfileService: Send)]
pub trait LocalProfileService {
    /// Push a user's profile attributes
    async fn forward(&self, profile: &Profile) -> Result<(), ProfileServiceError>;

    /// Fetch a user's profile as an opaque JSON object
    async fn fetch(&self, user_id: &UserId) -> Result<Map<String, Value>, ProfileServiceError>;
}
