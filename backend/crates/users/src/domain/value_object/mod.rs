//! Value Object Module

pub mod email;
pub mod profile_text;
pub mod user_id;
pub mod user_name;
