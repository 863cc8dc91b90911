//! Account registration and profile updates.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use jobboard_models::{Account, AccountKind, NewAccount, Page};

use crate::auth::CurrentAccount;
use crate::error::{ApiError, ApiResult};
use crate::security::hash_password;
use crate::state::AppState;

/// Account fields safe to return to clients.
#[derive(Debug, Serialize)]
pub struct AccountOut {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub kind: AccountKind,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountOut {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            kind: account.kind,
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub password_confirm: String,
    #[serde(default)]
    pub kind: AccountKind,
}

/// POST /api/accounts
///
/// All validation runs before any persistence access; a taken email is a
/// 409.
pub async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<AccountOut>> {
    payload.validate()?;
    if payload.password != payload.password_confirm {
        return Err(ApiError::validation("Passwords do not match"));
    }

    if state.accounts.find_by_email(&payload.email).await?.is_some() {
        return Err(ApiError::conflict("Email is already registered"));
    }

    let password_hash = hash_password(&payload.password, state.config.bcrypt_cost)
        .map_err(|err| ApiError::internal(format!("failed to hash password: {err}")))?;

    let account = state
        .accounts
        .insert(&NewAccount {
            email: payload.email,
            name: payload.name,
            password_hash,
            kind: payload.kind,
        })
        .await?;

    info!(account_id = account.id, kind = %account.kind, "account created");
    Ok(Json(account.into()))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AccountUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub kind: Option<AccountKind>,
}

/// PUT /api/accounts/:account_id
///
/// Accounts may only update themselves; a foreign id reads as missing. The
/// email-conflict check runs before the self check.
pub async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
    CurrentAccount(actor): CurrentAccount,
    Json(payload): Json<AccountUpdate>,
) -> ApiResult<Json<AccountOut>> {
    payload.validate()?;

    if let Some(email) = &payload.email {
        if state.accounts.find_by_email(email).await?.is_some() {
            return Err(ApiError::conflict("Email is already registered"));
        }
    }

    let mut account = match state.accounts.find_by_id(account_id).await? {
        Some(account) if account.email == actor.email => account,
        _ => return Err(ApiError::not_found("Account not found")),
    };

    if let Some(name) = payload.name {
        account.name = name;
    }
    if let Some(email) = payload.email {
        account.email = email;
    }
    if let Some(kind) = payload.kind {
        account.kind = kind;
    }

    let account = state.accounts.update(&account).await?;
    Ok(Json(account.into()))
}

/// GET /api/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> ApiResult<Json<Vec<AccountOut>>> {
    let accounts = state.accounts.list(page).await?;
    Ok(Json(accounts.into_iter().map(AccountOut::from).collect()))
}
