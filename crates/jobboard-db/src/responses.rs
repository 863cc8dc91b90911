//! Response repository.

use jobboard_models::{JobResponse, Page};
use sqlx::PgPool;

use crate::error::DbResult;

/// Repository for the responses table.
#[derive(Clone)]
pub struct ResponseRepo {
    pool: PgPool,
}

impl ResponseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a response. There is no unique (account_id, job_id) index;
    /// the caller's existence check and this insert can race.
    pub async fn insert(
        &self,
        account_id: i64,
        job_id: i64,
        message: Option<&str>,
    ) -> DbResult<JobResponse> {
        let row = sqlx::query_as::<_, JobResponse>(
            r#"
            INSERT INTO responses (account_id, job_id, message)
            VALUES ($1, $2, $3)
            RETURNING id, account_id, job_id, message
            "#,
        )
        .bind(account_id)
        .bind(job_id)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// The applicant's existing response to a job, if any.
    pub async fn find_by_job_and_account(
        &self,
        job_id: i64,
        account_id: i64,
    ) -> DbResult<Option<JobResponse>> {
        let row = sqlx::query_as::<_, JobResponse>(
            "SELECT id, account_id, job_id, message
             FROM responses WHERE job_id = $1 AND account_id = $2",
        )
        .bind(job_id)
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Responses to a job, scoped to the owning company. A job the given
    /// account does not own yields an empty list.
    pub async fn list_for_job_owner(
        &self,
        job_id: i64,
        owner_id: i64,
        page: Page,
    ) -> DbResult<Vec<JobResponse>> {
        let rows = sqlx::query_as::<_, JobResponse>(
            r#"
            SELECT r.id, r.account_id, r.job_id, r.message
            FROM responses r
            JOIN jobs j ON j.id = r.job_id
            WHERE r.job_id = $1 AND j.account_id = $2
            ORDER BY r.id LIMIT $3 OFFSET $4
            "#,
        )
        .bind(job_id)
        .bind(owner_id)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
