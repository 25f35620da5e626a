//! Domain Layer
//!
//! Contains entities, value objects, validation rules, and the ports
//! (repository and Profile Service traits) the application layer drives.

pub mod entity;
pub mod profile_service;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::{profile::Profile, user::User, user::UserIdentity};
pub use profile_service::{ProfileService, ProfileServiceError};
pub use repository::UserRepository;
