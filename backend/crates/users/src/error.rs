//! Users Error Types
//!
//! Users-specific error variants that integrate with the unified
//! `kernel::error::AppError` response format.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::profile_service::ProfileServiceError;
use crate::domain::validation::ValidationErrors;

/// Users-specific result type alias
pub type UsersResult<T> = Result<T, UsersError>;

#[derive(Debug, Error)]
pub enum UsersError {
    /// Request body failed field validation; carries every field error
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Request body is not the expected JSON document
    #[error("{0}")]
    MalformedBody(String),

    /// Email already present in the credential store
    #[error("User already registered!")]
    AlreadyRegistered,

    /// No such user locally, or the Profile Service has no profile
    #[error("User not found.")]
    UserNotFound,

    /// User was persisted but the Profile Service did not accept the
    /// profile. The local record is kept.
    #[error("Error forwarding data to Backend 2")]
    ForwardFailed(#[source] ProfileServiceError),

    /// Lookup failed for a reason other than a missing user
    #[error("An error occurred while retrieving user data.")]
    LookupFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Hashing or signing failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UsersError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UsersError::Validation(_)
            | UsersError::MalformedBody(_)
            | UsersError::AlreadyRegistered => ErrorKind::BadRequest,
            UsersError::UserNotFound => ErrorKind::NotFound,
            UsersError::Database(_)
            | UsersError::ForwardFailed(_)
            | UsersError::LookupFailed(_)
            | UsersError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Internal details stay in the logs.
    ///
    /// Unique violations never reach here as `Database`; the repository
    /// reports them as `AlreadyRegistered`.
    pub fn into_app_error(self) -> AppError {
        match self {
            UsersError::Database(e) => AppError::internal("Internal server error").with_source(e),
            UsersError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UsersError::Database(e) => {
                tracing::error!(error = %e, "Users database error");
            }
            UsersError::Internal(msg) => {
                tracing::error!(message = %msg, "Users internal error");
            }
            UsersError::ForwardFailed(e) => {
                tracing::warn!(error = %e, "Profile forward failed");
            }
            UsersError::LookupFailed(cause) => {
                tracing::warn!(cause = %cause, "User lookup failed");
            }
            _ => {
                tracing::debug!(error = %self, "Users request rejected");
            }
        }
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<platform::token::TokenError> for UsersError {
    fn from(err: platform::token::TokenError) -> Self {
        UsersError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for UsersError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        UsersError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldError;

    #[test]
    fn test_client_errors() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::required("bio"));

        let err = UsersError::Validation(errors).into_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "\"bio\" is required");

        let err = UsersError::AlreadyRegistered.into_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "User already registered!");

        let err = UsersError::UserNotFound.into_app_error();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "User not found.");
    }

    #[test]
    fn test_server_errors() {
        let err = UsersError::ForwardFailed(ProfileServiceError::Status(502)).into_app_error();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "Error forwarding data to Backend 2");

        let err = UsersError::LookupFailed("boom".into()).into_app_error();
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.message(),
            "An error occurred while retrieving user data."
        );
    }

    #[test]
    fn test_internal_detail_hidden() {
        let err = UsersError::Internal("argon2 exploded".into()).into_app_error();
        assert_eq!(err.status_code(), 500);
        assert!(!err.message().contains("argon2"));
    }

    #[test]
    fn test_database_errors_are_internal() {
        for cause in [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::RowNotFound,
            sqlx::Error::Io(std::io::Error::other("connection reset")),
        ] {
            let err = UsersError::Database(cause);
            assert_eq!(err.kind(), ErrorKind::InternalServerError);

            let app_err = err.into_app_error();
            assert_eq!(app_err.status_code(), 500);
            assert_eq!(app_err.message(), "Internal server error");
        }
    }
}
