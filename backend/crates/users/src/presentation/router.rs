//! Users Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::profile_service::ProfileService;
use crate::domain::repository::UserRepository;
use crate::infra::{postgres::PgUserRepository, profile_http::HttpProfileService};
use crate::presentation::handlers::{self, UsersAppState};

/// Create the Users router backed by PostgreSQL and the HTTP Profile Service
pub fn users_router(
    repo: PgUserRepository,
    profiles: HttpProfileService,
    config: UsersConfig,
) -> Router {
    users_router_generic(repo, profiles, config)
}

/// Create a Users router for any repository / Profile Service pair
pub fn users_router_generic<R, P>(repo: R, profiles: P, config: UsersConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
    P: ProfileService + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        profiles: Arc::new(profiles),
        config: Arc::new(config),
    };

    Router::new()
        .route("/users", post(handlers::register::<R, P>))
        .route("/users/{id}", get(handlers::lookup::<R, P>))
        .route("/health", get(handlers::health))
        .with_state(state)
}
