//! API configuration.

use anyhow::Context;
use jsonwebtoken::Algorithm;

/// API server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,

    /// Postgres connection string. Required.
    pub database_url: String,
    pub database_max_connections: u32,

    /// HMAC secret for bearer tokens. Required.
    pub secret_key: String,
    /// Signing algorithm, e.g. HS256.
    pub token_algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_minutes: i64,

    /// Bcrypt work factor for password hashing.
    pub bcrypt_cost: u32,
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let secret_key = std::env::var("SECRET_KEY").context("SECRET_KEY must be set")?;

        let token_algorithm = match std::env::var("ALGORITHM") {
            Ok(name) => name
                .parse()
                .map_err(|_| anyhow::anyhow!("unsupported ALGORITHM: {}", name))?,
            Err(_) => Algorithm::HS256,
        };

        Ok(Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse("API_PORT", 8000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            max_body_size: env_parse("MAX_BODY_SIZE", 2 * 1024 * 1024),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            database_url,
            database_max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 5),
            secret_key,
            token_algorithm,
            access_token_expire_minutes: env_parse("ACCESS_TOKEN_EXPIRE_MINUTES", 60),
            refresh_token_expire_minutes: env_parse("REFRESH_TOKEN_EXPIRE_MINUTES", 120),
            bcrypt_cost: env_parse("BCRYPT_COST", bcrypt::DEFAULT_COST),
        })
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parse_falls_back_on_missing_or_garbage() {
        assert_eq!(env_parse("JOBBOARD_TEST_UNSET_PORT", 8000u16), 8000);
        std::env::set_var("JOBBOARD_TEST_GARBAGE_PORT", "not-a-port");
        assert_eq!(env_parse("JOBBOARD_TEST_GARBAGE_PORT", 8000u16), 8000);
        std::env::remove_var("JOBBOARD_TEST_GARBAGE_PORT");
    }

    #[test]
    fn production_flag_is_case_insensitive() {
        let mut config = test_config();
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "development".to_string();
        assert!(!config.is_production());
    }

    fn test_config() -> ApiConfig {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 2 * 1024 * 1024,
            environment: "test".to_string(),
            database_url: "postgres://localhost/jobboard_test".to_string(),
            database_max_connections: 1,
            secret_key: "test-secret-key".to_string(),
            token_algorithm: Algorithm::HS256,
            access_token_expire_minutes: 60,
            refresh_token_expire_minutes: 120,
            bcrypt_cost: 4,
        }
    }
}
