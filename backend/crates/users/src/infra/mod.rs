//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod postgres;
pub mod profile_http;

pub use postgres::PgUserRepository;
pub use profile_http::HttpProfileService;
