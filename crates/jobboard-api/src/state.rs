//! Application state.

use jobboard_db::{AccountRepo, JobRepo, PgPool, ResponseRepo};

use crate::auth::TokenService;
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub pool: PgPool,
    pub accounts: AccountRepo,
    pub jobs: JobRepo,
    pub responses: ResponseRepo,
    pub tokens: TokenService,
}

impl AppState {
    /// Create new application state: open the pool and wire repositories.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let pool = jobboard_db::connect(&config.database_url, config.database_max_connections)?;
        Ok(Self {
            accounts: AccountRepo::new(pool.clone()),
            jobs: JobRepo::new(pool.clone()),
            responses: ResponseRepo::new(pool.clone()),
            tokens: TokenService::new(&config),
            pool,
            config,
        })
    }
}
