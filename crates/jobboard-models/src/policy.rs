//! Visibility policy: who may read and mutate jobs and responses.
//!
//! Every decision is a pure function of the acting account and the facts
//! about the resource, decoupled from persistence, so the precedence rules
//! (kind check before existence check, existence check before duplicate
//! check) can be unit-tested without a database.

use crate::account::Account;
use crate::job::Job;

/// Why an operation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deny {
    /// Authenticated, but the operation is not available to this account
    /// kind or crosses a resource it may not touch.
    Forbidden,
    /// The resource is absent or filtered out by visibility.
    NotFound,
}

/// Scoping variant the persistence gateway applies to job lookups and
/// listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobScope {
    /// Active jobs only. What applicants and non-owners see.
    ActiveOnly,
    /// Active jobs plus every job owned by the given account, any state.
    ActiveOrOwned(i64),
    /// Jobs owned by the given account, any state. Mutation lookups.
    OwnedOnly(i64),
}

impl JobScope {
    /// Pure mirror of the SQL predicate the gateway runs for this scope.
    pub fn permits(&self, job: &Job) -> bool {
        match *self {
            JobScope::ActiveOnly => job.is_active,
            JobScope::ActiveOrOwned(account_id) => job.is_active || job.account_id == account_id,
            JobScope::OwnedOnly(account_id) => job.account_id == account_id,
        }
    }
}

/// Read scope for single-job lookups and listings.
///
/// Companies see the union of all active jobs and their own jobs in any
/// state; applicants see active jobs only.
pub fn read_scope(actor: &Account) -> JobScope {
    if actor.kind.is_company() {
        JobScope::ActiveOrOwned(actor.id)
    } else {
        JobScope::ActiveOnly
    }
}

/// Lookup scope for job update and delete. Ownership-scoped: a job owned by
/// another company is indistinguishable from a missing one.
pub fn mutation_scope(actor: &Account) -> JobScope {
    JobScope::OwnedOnly(actor.id)
}

/// Job creation, update and deletion are company-only.
///
/// Runs before any lookup, so a non-company actor is denied Forbidden even
/// for a nonexistent job id.
pub fn ensure_company(actor: &Account) -> Result<(), Deny> {
    if actor.kind.is_company() {
        Ok(())
    } else {
        Err(Deny::Forbidden)
    }
}

/// Responding to jobs is applicant-only.
pub fn ensure_applicant(actor: &Account) -> Result<(), Deny> {
    if actor.kind.is_company() {
        Err(Deny::Forbidden)
    } else {
        Ok(())
    }
}

/// Read predicate for a single loaded job.
pub fn can_view_job(actor: &Account, job: &Job) -> bool {
    read_scope(actor).permits(job)
}

/// Write predicate for a single loaded job. The kind check precedes the
/// ownership check, and failed ownership reads as NotFound, never
/// Forbidden.
pub fn can_mutate_job(actor: &Account, job: &Job) -> Result<(), Deny> {
    ensure_company(actor)?;
    if job.account_id != actor.id {
        return Err(Deny::NotFound);
    }
    Ok(())
}

/// Gate for creating a response.
///
/// `visible_job` is the target job as seen through [`JobScope::ActiveOnly`];
/// missing and inactive jobs both arrive as `None`. Precedence: kind check,
/// then job existence, then the duplicate check. A missing job is NotFound
/// even when a duplicate response also exists.
pub fn authorize_response_creation(
    actor: &Account,
    visible_job: Option<&Job>,
    already_responded: bool,
) -> Result<(), Deny> {
    ensure_applicant(actor)?;
    if visible_job.is_none() {
        return Err(Deny::NotFound);
    }
    if already_responded {
        return Err(Deny::Forbidden);
    }
    Ok(())
}
