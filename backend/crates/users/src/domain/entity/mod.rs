//! Entities

pub mod profile;
pub mod user;
