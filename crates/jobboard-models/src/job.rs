//! Job listing models and their input types.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A job listing. Owned exclusively by the posting company account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
pub struct Job {
    pub id: i64,

    /// Owning account.
    pub account_id: i64,

    pub title: String,

    pub description: String,

    /// Lower salary bound, if advertised.
    pub salary_from: Option<f64>,

    /// Upper salary bound, if advertised.
    pub salary_to: Option<f64>,

    /// Inactive jobs are visible to their owner only.
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

/// Rejected salary bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SalaryRangeError {
    #[error("salary bounds must be non-negative")]
    Negative,

    #[error("salary_to must be greater than or equal to salary_from")]
    UpperBelowLower,
}

/// Bounds are judged as submitted, independent of any stored values.
fn check_salary_range(from: Option<f64>, to: Option<f64>) -> Result<(), SalaryRangeError> {
    for bound in [from, to].into_iter().flatten() {
        if bound < 0.0 {
            return Err(SalaryRangeError::Negative);
        }
    }
    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            return Err(SalaryRangeError::UpperBelowLower);
        }
    }
    Ok(())
}

/// Payload for creating a job.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub salary_from: Option<f64>,
    #[serde(default)]
    pub salary_to: Option<f64>,
    /// Jobs default to active when the flag is omitted.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl JobDraft {
    pub fn validate(&self) -> Result<(), SalaryRangeError> {
        check_salary_range(self.salary_from, self.salary_to)
    }
}

/// Partial update for a job. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct JobUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary_from: Option<f64>,
    #[serde(default)]
    pub salary_to: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl JobUpdate {
    /// Salary bounds are validated on the incoming pair alone, before any
    /// merge with the stored job.
    pub fn validate(&self) -> Result<(), SalaryRangeError> {
        check_salary_range(self.salary_from, self.salary_to)
    }

    /// Field-level merge: absent means unchanged, never null.
    pub fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(salary_from) = self.salary_from {
            job.salary_from = Some(salary_from);
        }
        if let Some(salary_to) = self.salary_to {
            job.salary_to = Some(salary_to);
        }
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(salary_from: Option<f64>, salary_to: Option<f64>) -> JobDraft {
        JobDraft {
            title: "Backend engineer".to_string(),
            description: "Rust services".to_string(),
            salary_from,
            salary_to,
            is_active: None,
        }
    }

    fn stored_job() -> Job {
        Job {
            id: 1,
            account_id: 10,
            title: "Backend engineer".to_string(),
            description: "Rust services".to_string(),
            salary_from: Some(90_000.0),
            salary_to: Some(120_000.0),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn valid_salary_range_is_accepted() {
        assert_eq!(draft(Some(10_000.0), Some(35_000.0)).validate(), Ok(()));
    }

    #[test]
    fn inverted_salary_range_is_rejected() {
        assert_eq!(
            draft(Some(10_000.0), Some(5_000.0)).validate(),
            Err(SalaryRangeError::UpperBelowLower)
        );
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert_eq!(
            draft(Some(-1.0), None).validate(),
            Err(SalaryRangeError::Negative)
        );
        assert_eq!(
            draft(None, Some(-500.0)).validate(),
            Err(SalaryRangeError::Negative)
        );
    }

    #[test]
    fn one_sided_and_absent_bounds_are_accepted() {
        assert_eq!(draft(Some(10_000.0), None).validate(), Ok(()));
        assert_eq!(draft(None, Some(35_000.0)).validate(), Ok(()));
        assert_eq!(draft(None, None).validate(), Ok(()));
    }

    #[test]
    fn update_validates_incoming_pair_only() {
        // Stored job has salary_to = 120_000; the incoming lone bound is
        // judged by itself, not against the stored upper bound.
        let update = JobUpdate {
            salary_from: Some(200_000.0),
            ..Default::default()
        };
        assert_eq!(update.validate(), Ok(()));

        let update = JobUpdate {
            salary_from: Some(50_000.0),
            salary_to: Some(40_000.0),
            ..Default::default()
        };
        assert_eq!(update.validate(), Err(SalaryRangeError::UpperBelowLower));
    }

    #[test]
    fn apply_merges_present_fields_only() {
        let mut job = stored_job();
        let update = JobUpdate {
            title: Some("Senior backend engineer".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        update.apply(&mut job);

        assert_eq!(job.title, "Senior backend engineer");
        assert!(!job.is_active);
        // Absent means unchanged, never null.
        assert_eq!(job.description, "Rust services");
        assert_eq!(job.salary_from, Some(90_000.0));
        assert_eq!(job.salary_to, Some(120_000.0));
    }

    #[test]
    fn apply_overwrites_salary_when_present() {
        let mut job = stored_job();
        let update = JobUpdate {
            salary_from: Some(100_000.0),
            salary_to: Some(140_000.0),
            ..Default::default()
        };
        update.apply(&mut job);

        assert_eq!(job.salary_from, Some(100_000.0));
        assert_eq!(job.salary_to, Some(140_000.0));
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut job = stored_job();
        let before = job.clone();
        JobUpdate::default().apply(&mut job);
        assert_eq!(job, before);
    }
}
