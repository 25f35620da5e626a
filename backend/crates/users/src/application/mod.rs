//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod lookup;
pub mod register;
pub mod token_issuer;

// Re-exports
pub use config::UsersConfig;
pub use lookup::LookupUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase, ValidatedRegistration};
pub use token_issuer::{ServiceClaims, SessionClaims, TokenIssuer};
