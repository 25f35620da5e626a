//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::application::{LookupUseCase, RegisterUseCase};
use crate::domain::profile_service::ProfileService;
use crate::domain::repository::UserRepository;
use crate::error::{UsersError, UsersResult};
use crate::presentation::dto::{RegisterRequest, RegisterResponse};

/// Shared state for users handlers
pub struct UsersAppState<R, P>
where
    R: UserRepository + Send + Sync + 'static,
    P: ProfileService + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub profiles: Arc<P>,
    pub config: Arc<UsersConfig>,
}

// Only the Arcs are cloned, so no `R: Clone` / `P: Clone` bound
impl<R, P> Clone for UsersAppState<R, P>
where
    R: UserRepository + Send + Sync + 'static,
    P: ProfileService + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            profiles: self.profiles.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /users
pub async fn register<R, P>(
    State(state): State<UsersAppState<R, P>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> UsersResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
    P: ProfileService + Send + Sync + 'static,
{
    let Json(req) = body.map_err(malformed_body)?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.profiles.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

fn malformed_body(rejection: JsonRejection) -> UsersError {
    tracing::debug!(rejection = %rejection.body_text(), "Register body rejected");

    let message = match rejection {
        JsonRejection::JsonDataError(_) => "\"value\" must be of type object",
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
        JsonRejection::MissingJsonContentType(_) => "Request body must be application/json",
        _ => "Request body could not be read",
    };

    UsersError::MalformedBody(message.to_string())
}

// ============================================================================
// Lookup
// ============================================================================

/// GET /users/{id}
pub async fn lookup<R, P>(
    State(state): State<UsersAppState<R, P>>,
    Path(id): Path<String>,
) -> UsersResult<Json<Value>>
where
    R: UserRepository + Send + Sync + 'static,
    P: ProfileService + Send + Sync + 'static,
{
    let use_case = LookupUseCase::new(state.repo.clone(), state.profiles.clone());

    let merged = use_case.execute(&id).await?;

    Ok(Json(Value::Object(merged)))
}

// ============================================================================
// Health
// ============================================================================

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
