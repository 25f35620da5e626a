//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, validation, ports
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL store and the HTTP Profile Service client
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration: `email`, `password`, `username` are kept here;
//!   `bio` and `interests` are forwarded to the Profile Service
//! - Lookup: local identity merged with the remote profile
//! - HS256 session tokens (3 hours) returned on registration
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned or forwarded
//! - Calls to the Profile Service carry a short-lived service token
//! - Lookup responses never contain password fields

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UsersError, UsersResult};
pub use infra::{postgres::PgUserRepository, profile_http::HttpProfileService};
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
