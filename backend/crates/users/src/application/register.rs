//! Register Use Case
//!
//! Creates a user record, issues its session token, and hands the profile
//! attributes to the Profile Service.
//!
//! ## Consistency
//! The record is persisted before the profile is forwarded. If the forward
//! fails the request fails, but the record stays: local writes are
//! at-least-once, the remote side is best-effort. There is no compensation
//! and no retry.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::UsersConfig;
use crate::application::token_issuer::TokenIssuer;
use crate::domain::entity::{profile::Profile, user::User};
use crate::domain::profile_service::ProfileService;
use crate::domain::repository::UserRepository;
use crate::domain::validation::{FieldError, RawField, ValidationErrors};
use crate::domain::value_object::{
    email::Email, profile_text::ProfileText, user_id::UserId, user_name::UserName,
};
use crate::error::{UsersError, UsersResult};

/// Registration body as received; any field may be missing or mistyped
#[derive(Debug, Default)]
pub struct RegisterInput {
    pub email: RawField,
    pub password: RawField,
    pub username: RawField,
    pub bio: RawField,
    pub interests: RawField,
    /// Body keys outside the five above, in body order
    pub unknown_keys: Vec<String>,
}

/// Registration input that passed every field rule
#[derive(Debug)]
pub struct ValidatedRegistration {
    pub email: Email,
    pub password: ClearTextPassword,
    pub user_name: UserName,
    pub bio: ProfileText,
    pub interests: ProfileText,
}

impl RegisterInput {
    /// Check every field, in order: email, password, username, bio,
    /// interests, then any unknown keys.
    pub fn validate(self) -> Result<ValidatedRegistration, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = errors.check(self.email.require("email").and_then(Email::new));
        let password = errors.check(self.password.require("password").and_then(|raw| {
            ClearTextPassword::new(raw).map_err(|e| FieldError::new("password", e.to_string()))
        }));
        let user_name = errors.check(self.username.require("username").and_then(UserName::new));
        let bio = errors.check(
            self.bio
                .require("bio")
                .and_then(|raw| ProfileText::new("bio", raw)),
        );
        let interests = errors.check(
            self.interests
                .require("interests")
                .and_then(|raw| ProfileText::new("interests", raw)),
        );

        for key in self.unknown_keys {
            errors.push(FieldError::not_allowed(key));
        }

        match (email, password, user_name, bio, interests) {
            (Some(email), Some(password), Some(user_name), Some(bio), Some(interests))
                if errors.is_empty() =>
            {
                Ok(ValidatedRegistration {
                    email,
                    password,
                    user_name,
                    bio,
                    interests,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub token: String,
    pub user_id: UserId,
    pub email: Email,
    pub user_name: UserName,
}

/// Register use case
pub struct RegisterUseCase<U, P>
where
    U: UserRepository,
    P: ProfileService,
{
    user_repo: Arc<U>,
    profiles: Arc<P>,
    config: Arc<UsersConfig>,
}

impl<U, P> RegisterUseCase<U, P>
where
    U: UserRepository,
    P: ProfileService,
{
    pub fn new(user_repo: Arc<U>, profiles: Arc<P>, config: Arc<UsersConfig>) -> Self {
        Self {
            user_repo,
            profiles,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> UsersResult<RegisterOutput> {
        let ValidatedRegistration {
            email,
            password,
            user_name,
            bio,
            interests,
        } = input.validate().map_err(UsersError::Validation)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(UsersError::AlreadyRegistered);
        }

        let password_hash = password.hash(self.config.pepper())?;
        drop(password);

        let user = User::new(email, user_name, password_hash);

        // Signed before the insert; the id is already final.
        let token = TokenIssuer::new(self.config.clone()).issue_session(&user)?;

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        let profile = Profile::new(user.user_id, bio, interests);
        self.profiles
            .forward(&profile)
            .await
            .map_err(UsersError::ForwardFailed)?;

        tracing::debug!(user_id = %user.user_id, "Profile forwarded");

        Ok(RegisterOutput {
            token,
            user_id: user.user_id,
            email: user.email,
            user_name: user.user_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RegisterInput {
        RegisterInput {
            email: "a@b.com".into(),
            password: "secret".into(),
            username: "abc".into(),
            bio: "hi".into(),
            interests: "golf".into(),
            unknown_keys: Vec::new(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let valid = input().validate().unwrap();
        assert_eq!(valid.email.as_str(), "a@b.com");
        assert_eq!(valid.user_name.as_str(), "abc");
        assert_eq!(valid.bio.as_str(), "hi");
        assert_eq!(valid.interests.as_str(), "golf");
    }

    #[test]
    fn test_missing_bio() {
        let errors = RegisterInput {
            bio: RawField::Missing,
            ..input()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.to_string(), "\"bio\" is required");
    }

    #[test]
    fn test_first_error_follows_field_order() {
        let errors = RegisterInput {
            email: "not-an-email".into(),
            username: "x".into(),
            interests: RawField::Missing,
            ..input()
        }
        .validate()
        .unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_ref()).collect();
        assert_eq!(fields, vec!["email", "username", "interests"]);
        assert_eq!(errors.to_string(), "\"email\" must be a valid email");
    }

    #[test]
    fn test_short_password() {
        let errors = RegisterInput {
            password: "abcd".into(),
            ..input()
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            errors.first().unwrap().message,
            "\"password\" length must be at least 5 characters long"
        );
    }

    #[test]
    fn test_wrong_type() {
        let errors = RegisterInput {
            bio: RawField::NotText,
            ..input()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.to_string(), "\"bio\" must be a string");
    }

    #[test]
    fn test_unknown_keys_checked_after_fields() {
        let errors = RegisterInput {
            unknown_keys: vec!["isAdmin".into()],
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.to_string(), "\"isAdmin\" is not allowed");

        let errors = RegisterInput {
            username: RawField::Missing,
            unknown_keys: vec!["isAdmin".into()],
            ..input()
        }
        .validate()
        .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_ref()).collect();
        assert_eq!(fields, vec!["username", "isAdmin"]);
    }

    #[test]
    fn test_everything_missing() {
        let errors = RegisterInput::default().validate().unwrap_err();
        assert_eq!(errors.iter().count(), 5);
        assert_eq!(errors.to_string(), "\"email\" is required");
    }
}
