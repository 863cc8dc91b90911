//! Job repository. One static query shape per visibility scope.

use jobboard_models::{Job, JobDraft, JobScope, Page};
use sqlx::PgPool;

use crate::error::DbResult;

const JOB_COLUMNS: &str =
    "id, account_id, title, description, salary_from, salary_to, is_active, created_at";

/// Repository for the jobs table.
#[derive(Clone)]
pub struct JobRepo {
    pool: PgPool,
}

impl JobRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, account_id: i64, draft: &JobDraft) -> DbResult<Job> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (account_id, title, description, salary_from, salary_to, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {JOB_COLUMNS}
            "#,
        ))
        .bind(account_id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.salary_from)
        .bind(draft.salary_to)
        .bind(draft.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// In-place update of a loaded job; every mutable column is written.
    pub async fn update(&self, job: &Job) -> DbResult<Job> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET title = $2, description = $3, salary_from = $4, salary_to = $5, is_active = $6
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#,
        ))
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(job.salary_from)
        .bind(job.salary_to)
        .bind(job.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Look up a single job through the given visibility scope. A job the
    /// scope filters out reads as absent.
    pub async fn find_in_scope(&self, id: i64, scope: JobScope) -> DbResult<Option<Job>> {
        let row = match scope {
            JobScope::ActiveOnly => {
                sqlx::query_as::<_, Job>(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND is_active",
                ))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
            JobScope::ActiveOrOwned(account_id) => {
                sqlx::query_as::<_, Job>(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs
                     WHERE id = $1 AND (is_active OR account_id = $2)",
                ))
                .bind(id)
                .bind(account_id)
                .fetch_optional(&self.pool)
                .await?
            }
            JobScope::OwnedOnly(account_id) => {
                sqlx::query_as::<_, Job>(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND account_id = $2",
                ))
                .bind(id)
                .bind(account_id)
                .fetch_optional(&self.pool)
                .await?
            }
        };
        Ok(row)
    }

    /// List jobs through the given visibility scope.
    pub async fn list_in_scope(&self, scope: JobScope, page: Page) -> DbResult<Vec<Job>> {
        let rows = match scope {
            JobScope::ActiveOnly => {
                sqlx::query_as::<_, Job>(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs WHERE is_active
                     ORDER BY id LIMIT $1 OFFSET $2",
                ))
                .bind(page.limit)
                .bind(page.skip)
                .fetch_all(&self.pool)
                .await?
            }
            JobScope::ActiveOrOwned(account_id) => {
                sqlx::query_as::<_, Job>(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs
                     WHERE is_active OR account_id = $3
                     ORDER BY id LIMIT $1 OFFSET $2",
                ))
                .bind(page.limit)
                .bind(page.skip)
                .bind(account_id)
                .fetch_all(&self.pool)
                .await?
            }
            JobScope::OwnedOnly(account_id) => {
                sqlx::query_as::<_, Job>(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs WHERE account_id = $3
                     ORDER BY id LIMIT $1 OFFSET $2",
                ))
                .bind(page.limit)
                .bind(page.skip)
                .bind(account_id)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }
}
