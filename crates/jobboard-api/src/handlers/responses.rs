//! Responses to job listings.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use jobboard_models::{policy, JobResponse, JobScope, Page};

use crate::auth::CurrentAccount;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResponseDraft {
    pub job_id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// GET /api/jobs/:job_id/responses
///
/// Company accounts only. The list is scoped to jobs the actor owns, so a
/// non-owned job yields an empty list rather than an error.
pub async fn list_responses_for_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    Query(page): Query<Page>,
    CurrentAccount(actor): CurrentAccount,
) -> ApiResult<Json<Vec<JobResponse>>> {
    policy::ensure_company(&actor)?;

    let responses = state
        .responses
        .list_for_job_owner(job_id, actor.id, page)
        .await?;
    Ok(Json(responses))
}

/// POST /api/responses
///
/// Applicant accounts only. The target job must exist and be active
/// (checked before the duplicate test), and each applicant responds to a
/// job at most once.
pub async fn create_response(
    State(state): State<AppState>,
    CurrentAccount(actor): CurrentAccount,
    Json(draft): Json<ResponseDraft>,
) -> ApiResult<Json<JobResponse>> {
    policy::ensure_applicant(&actor)?;

    let job = state
        .jobs
        .find_in_scope(draft.job_id, JobScope::ActiveOnly)
        .await?;
    let already_responded = match &job {
        Some(job) => state
            .responses
            .find_by_job_and_account(job.id, actor.id)
            .await?
            .is_some(),
        None => false,
    };
    policy::authorize_response_creation(&actor, job.as_ref(), already_responded)?;

    let response = state
        .responses
        .insert(actor.id, draft.job_id, draft.message.as_deref())
        .await?;
    info!(
        response_id = response.id,
        job_id = response.job_id,
        account_id = actor.id,
        "response created"
    );
    Ok(Json(response))
}
