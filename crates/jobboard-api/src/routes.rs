//! API routes.

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::accounts::{create_account, list_accounts, update_account};
use crate::handlers::auth::{login, refresh};
use crate::handlers::jobs::{create_job, delete_job, get_job, list_jobs, update_job};
use crate::handlers::responses::{create_response, list_responses_for_job};
use crate::handlers::{health, ready};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh));

    let account_routes = Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts", post(create_account))
        .route("/accounts/:account_id", put(update_account));

    let job_routes = Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs", post(create_job))
        .route("/jobs/:job_id", get(get_job))
        .route("/jobs/:job_id", put(update_job))
        .route("/jobs/:job_id", delete(delete_job))
        .route("/jobs/:job_id/responses", get(list_responses_for_job));

    let response_routes = Router::new().route("/responses", post(create_response));

    let api_routes = Router::new()
        .merge(auth_routes)
        .merge(account_routes)
        .merge(job_routes)
        .merge(response_routes);

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
