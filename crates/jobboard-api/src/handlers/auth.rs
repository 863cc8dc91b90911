//! Login and token refresh.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::auth::TokenPair;
use crate::error::{ApiError, ApiResult};
use crate::security::verify_password;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Token pair response; `token_type` is always `Bearer`.
#[derive(Debug, Serialize)]
pub struct TokensResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
}

impl TokensResponse {
    fn new(message: &str, pair: TokenPair) -> Self {
        Self {
            message: message.to_string(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
        }
    }
}

/// POST /api/auth/login
///
/// Returns:
/// - 200: access+refresh pair
/// - 401: unknown email or wrong password (indistinguishable on purpose)
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<TokensResponse>> {
    payload.validate()?;

    let account = state.accounts.find_by_email(&payload.email).await?;
    let account = match account {
        Some(account) if verify_password(&payload.password, &account.password_hash) => account,
        _ => return Err(ApiError::unauthorized("Incorrect email or password")),
    };

    info!(account_id = account.id, "login");

    let pair = state.tokens.issue_pair(&account.email)?;
    Ok(Json(TokensResponse::new("Login successful", pair)))
}

#[derive(Debug, Deserialize)]
pub struct RefreshParams {
    pub refresh_token: String,
}

/// POST /api/auth/refresh
///
/// Exchanges a still-valid refresh token for a fresh pair. 401 when the
/// signature is bad or the embedded expiry has passed.
pub async fn refresh(
    State(state): State<AppState>,
    Query(params): Query<RefreshParams>,
) -> ApiResult<Json<TokensResponse>> {
    let pair = state.tokens.refresh(&params.refresh_token)?;
    Ok(Json(TokensResponse::new("Creating tokens successful", pair)))
}
