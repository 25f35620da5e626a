//! User Entity
//!
//! The credential record owned by this service. Profile attributes live
//! in the Profile Service and never appear here.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Generated locally before the record is persisted, so the session
    /// token and the stored row always carry the same id.
    pub user_id: UserId,
    /// Unique across all users
    pub email: Email,
    pub user_name: UserName,
    /// Argon2id PHC string, never the clear text
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(email: Email, user_name: UserName, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Projection without credentials
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            user_id: self.user_id,
            email: self.email.clone(),
            user_name: self.user_name.clone(),
        }
    }
}

/// The non-secret part of a user record, as read back for lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: UserId,
    pub email: Email,
    pub user_name: UserName,
}
