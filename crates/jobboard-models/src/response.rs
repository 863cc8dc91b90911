//! Applicant responses to job listings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One applicant's application to one job. Immutable once created; each
/// applicant responds to a given job at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
pub struct JobResponse {
    pub id: i64,

    /// Responding applicant account.
    pub account_id: i64,

    /// Target job.
    pub job_id: i64,

    /// Optional cover letter.
    pub message: Option<String>,
}
