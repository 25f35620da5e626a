//! Lookup Use Case
//!
//! Merges the identity fields kept here with the profile held by the
//! Profile Service into one flat JSON object.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::entity::user::UserIdentity;
use crate::domain::profile_service::{ProfileService, ProfileServiceError};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UsersError, UsersResult};

/// Keys that must never reach a lookup response, whoever sent them
const WITHHELD_KEYS: &[&str] = &["passwordHash", "password_hash", "password"];

pub struct LookupUseCase<U, P>
where
    U: UserRepository,
    P: ProfileService,
{
    user_repo: Arc<U>,
    profiles: Arc<P>,
}

impl<U, P> LookupUseCase<U, P>
where
    U: UserRepository,
    P: ProfileService,
{
    pub fn new(user_repo: Arc<U>, profiles: Arc<P>) -> Self {
        Self {
            user_repo,
            profiles,
        }
    }

    /// Look up by the raw path segment.
    ///
    /// An id that does not parse cannot exist, so it is reported as not
    /// found without touching either store.
    pub async fn execute(&self, raw_id: &str) -> UsersResult<Map<String, Value>> {
        let user_id: UserId = raw_id.parse().map_err(|_| UsersError::UserNotFound)?;

        let identity = self
            .user_repo
            .find_identity_by_id(&user_id)
            .await
            .map_err(|e| UsersError::LookupFailed(e.to_string()))?
            .ok_or(UsersError::UserNotFound)?;

        let profile = match self.profiles.fetch(&user_id).await {
            Ok(profile) => profile,
            Err(ProfileServiceError::NotFound) => {
                tracing::debug!(user_id = %user_id, "User has no profile");
                return Err(UsersError::UserNotFound);
            }
            Err(e) => return Err(UsersError::LookupFailed(e.to_string())),
        };

        Ok(merge_profile(identity, profile))
    }
}

/// Shallow merge; profile keys win on collision.
pub fn merge_profile(identity: UserIdentity, profile: Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::new();
    merged.insert("id".into(), Value::String(identity.user_id.to_string()));
    merged.insert("username".into(), Value::String(identity.user_name.to_string()));
    merged.insert("email".into(), Value::String(identity.email.to_string()));

    merged.extend(profile);

    for key in WITHHELD_KEYS {
        merged.shift_remove(*key);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_name::UserName};
    use serde_json::json;

    fn identity() -> UserIdentity {
        UserIdentity {
            user_id: UserId::new(),
            email: Email::new("a@b.com").unwrap(),
            user_name: UserName::new("abc").unwrap(),
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_merge_combines_both_sides() {
        let identity = identity();
        let id = identity.user_id.to_string();

        let merged = merge_profile(identity, object(json!({"bio": "hi", "interests": "golf"})));

        assert_eq!(
            Value::Object(merged),
            json!({
                "id": id,
                "username": "abc",
                "email": "a@b.com",
                "bio": "hi",
                "interests": "golf",
            })
        );
    }

    #[test]
    fn test_merge_profile_wins_on_collision() {
        let merged = merge_profile(identity(), object(json!({"username": "remote"})));
        assert_eq!(merged["username"], json!("remote"));
        assert_eq!(merged["email"], json!("a@b.com"));
    }

    #[test]
    fn test_merge_never_emits_password_fields() {
        let merged = merge_profile(
            identity(),
            object(json!({"bio": "hi", "passwordHash": "$argon2id$...", "password": "x"})),
        );
        assert!(!merged.contains_key("passwordHash"));
        assert!(!merged.contains_key("password"));
        assert_eq!(merged["bio"], json!("hi"));
    }
}
