//! PostgreSQL persistence gateway.
//!
//! Exposes, per entity, exactly the query shapes the visibility policy
//! needs: scoped lookups and listings, inserts, in-place updates, deletes.
//! Connection pooling and embedded migrations via sqlx.

pub mod accounts;
pub mod error;
pub mod jobs;
pub mod pool;
pub mod responses;

pub use accounts::AccountRepo;
pub use error::{DbError, DbResult};
pub use jobs::JobRepo;
pub use pool::{connect, migrate, MIGRATOR};
pub use responses::ResponseRepo;

pub use sqlx::PgPool;
