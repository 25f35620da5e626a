//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::register::{RegisterInput, RegisterOutput};
use crate::domain::validation::RawField;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Kept as the raw JSON object so that missing, mistyped and unknown keys
/// are all reported by validation instead of by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RegisterRequest(pub Map<String, Value>);

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        let mut input = RegisterInput::default();

        for (key, value) in req.0 {
            let slot = match key.as_str() {
                "email" => Some(&mut input.email),
                "password" => Some(&mut input.password),
                "username" => Some(&mut input.username),
                "bio" => Some(&mut input.bio),
                "interests" => Some(&mut input.interests),
                _ => None,
            };
            match slot {
                Some(slot) => {
                    *slot = match value {
                        Value::String(text) => RawField::Text(text),
                        _ => RawField::NotText,
                    };
                }
                None => input.unknown_keys.push(key),
            }
        }

        input
    }
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Public part of a freshly registered user
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub username: String,
}

impl From<RegisterOutput> for RegisterResponse {
    fn from(output: RegisterOutput) -> Self {
        RegisterResponse {
            token: output.token,
            user: UserSummary {
                id: output.user_id.to_string(),
                email: output.email.to_string(),
                username: output.user_name.to_string(),
            },
        }
    }
}
