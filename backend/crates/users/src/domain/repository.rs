//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{User, UserIdentity};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::UsersResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user.
    ///
    /// A duplicate email must surface as `UsersError::AlreadyRegistered`,
    /// including when it loses a race against a concurrent insert.
    async fn create(&self, user: &User) -> UsersResult<()>;

    /// Check if a user with this email exists
    async fn exists_by_email(&self, email: &Email) -> UsersResult<bool>;

    /// Load id, email and user name. The password hash is never read.
    async fn find_identity_by_id(&self, user_id: &UserId) -> UsersResult<Option<UserIdentity>>;
}
