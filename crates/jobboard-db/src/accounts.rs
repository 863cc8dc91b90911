//! Account repository.

use jobboard_models::{Account, NewAccount, Page};
use sqlx::PgPool;

use crate::error::DbResult;

/// Repository for the accounts table.
#[derive(Clone)]
pub struct AccountRepo {
    pool: PgPool,
}

impl AccountRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account. A duplicate email surfaces as
    /// [`crate::DbError::UniqueViolation`].
    pub async fn insert(&self, account: &NewAccount) -> DbResult<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, name, password_hash, kind)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, password_hash, kind, created_at
            "#,
        )
        .bind(&account.email)
        .bind(&account.name)
        .bind(&account.password_hash)
        .bind(account.kind)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            "SELECT id, email, name, password_hash, kind, created_at
             FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            "SELECT id, email, name, password_hash, kind, created_at
             FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list(&self, page: Page) -> DbResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            "SELECT id, email, name, password_hash, kind, created_at
             FROM accounts ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// In-place update of a loaded account (name, email, kind).
    pub async fn update(&self, account: &Account) -> DbResult<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET email = $2, name = $3, kind = $4
            WHERE id = $1
            RETURNING id, email, name, password_hash, kind, created_at
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.name)
        .bind(account.kind)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
