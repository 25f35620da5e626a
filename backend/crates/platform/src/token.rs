//! Signed Token Utilities
//!
//! HS256 JSON Web Tokens over caller-defined claim types.
//! Callers own the claim shape; this module only stamps the registered
//! `iat`/`exp` claims and signs.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("System clock is before the Unix epoch")]
    Clock,

    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("Token rejected: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Claims wrapper carrying the registered time claims next to the
/// caller's own fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signed<T> {
    #[serde(flatten)]
    pub claims: T,
    /// Issued at (seconds since epoch)
    pub iat: u64,
    /// Expiry (seconds since epoch)
    pub exp: u64,
}

/// Sign `claims` with `secret`, valid for `ttl` from now.
pub fn sign<T: Serialize>(claims: T, secret: &[u8], ttl: Duration) -> Result<String, TokenError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::Clock)?
        .as_secs();

    let signed = Signed {
        claims,
        iat: now,
        exp: now + ttl.as_secs(),
    };

    encode(
        &Header::default(),
        &signed,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenError::Signing)
}

/// Check signature and expiry, returning the decoded claims.
pub fn verify<T: DeserializeOwned>(token: &str, secret: &[u8]) -> Result<Signed<T>, TokenError> {
    let data = decode::<Signed<T>>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map_err(TokenError::Invalid)?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Subject {
        id: String,
        email: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Empty {}

    const SECRET: &[u8] = b"test_secret_key_minimum_32_characters_long";

    fn subject() -> Subject {
        Subject {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let token = sign(subject(), SECRET, Duration::from_secs(3 * 3600)).unwrap();

        let decoded: Signed<Subject> = verify(&token, SECRET).unwrap();
        assert_eq!(decoded.claims, subject());
        assert_eq!(decoded.exp - decoded.iat, 3 * 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = sign(subject(), SECRET, Duration::from_secs(60)).unwrap();

        let result = verify::<Subject>(&token, b"wrong_secret");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_expired_rejected() {
        // Past the default 60s leeway
        let signed = Signed {
            claims: subject(),
            iat: 1_000,
            exp: 2_000,
        };
        let token = encode(
            &Header::default(),
            &signed,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(verify::<Subject>(&token, SECRET).is_err());
    }

    #[test]
    fn test_empty_claims() {
        let token = sign(Empty {}, SECRET, Duration::from_secs(60)).unwrap();
        let decoded: Signed<serde_json::Value> = verify(&token, SECRET).unwrap();

        let object = decoded.claims.as_object().unwrap();
        assert!(object.is_empty());
    }
}
