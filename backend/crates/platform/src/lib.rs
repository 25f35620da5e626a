//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Signed tokens (HS256 JWT)
//! - Outbound HTTP client construction

pub mod http_client;
pub mod password;
pub mod token;
