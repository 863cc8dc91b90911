//! Job listing CRUD, gated by the visibility policy.

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::info;

use jobboard_models::{policy, Job, JobDraft, JobUpdate, Page};

use crate::auth::CurrentAccount;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/jobs
///
/// Applicants see active jobs; companies additionally see their own
/// inactive ones.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(page): Query<Page>,
    CurrentAccount(actor): CurrentAccount,
) -> ApiResult<Json<Vec<Job>>> {
    let scope = policy::read_scope(&actor);
    let jobs = state.jobs.list_in_scope(scope, page).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:job_id
///
/// 404 covers both a missing job and one filtered out by visibility.
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    CurrentAccount(actor): CurrentAccount,
) -> ApiResult<Json<Job>> {
    let job = state
        .jobs
        .find_in_scope(job_id, policy::read_scope(&actor))
        .await?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;
    Ok(Json(job))
}

/// POST /api/jobs
///
/// Company accounts only; the kind check precedes everything else.
pub async fn create_job(
    State(state): State<AppState>,
    CurrentAccount(actor): CurrentAccount,
    Json(draft): Json<JobDraft>,
) -> ApiResult<Json<Job>> {
    policy::ensure_company(&actor)?;
    draft.validate()?;

    let job = state.jobs.insert(actor.id, &draft).await?;
    info!(job_id = job.id, account_id = actor.id, "job created");
    Ok(Json(job))
}

/// PUT /api/jobs/:job_id
///
/// Partial update; absent fields keep their stored values. The lookup is
/// ownership-scoped, so another company's job reads as missing: 404, not
/// 403.
pub async fn update_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    CurrentAccount(actor): CurrentAccount,
    Json(update): Json<JobUpdate>,
) -> ApiResult<Json<Job>> {
    policy::ensure_company(&actor)?;
    update.validate()?;

    let mut job = state
        .jobs
        .find_in_scope(job_id, policy::mutation_scope(&actor))
        .await?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    update.apply(&mut job);
    let job = state.jobs.update(&job).await?;
    Ok(Json(job))
}

/// DELETE /api/jobs/:job_id
///
/// Returns the deleted entity.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    CurrentAccount(actor): CurrentAccount,
) -> ApiResult<Json<Job>> {
    policy::ensure_company(&actor)?;

    let job = state
        .jobs
        .find_in_scope(job_id, policy::mutation_scope(&actor))
        .await?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    state.jobs.delete(job.id).await?;
    info!(job_id = job.id, account_id = actor.id, "job deleted");
    Ok(Json(job))
}
