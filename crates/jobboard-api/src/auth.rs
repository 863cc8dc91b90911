//! Bearer token issuance and validation.
//!
//! Tokens are HMAC-signed JWTs carrying a custom `valid_until` claim (unix
//! seconds) instead of the registered `exp`. Signature verification and
//! expiry are deliberately two separate steps: [`TokenService::validate`]
//! only proves the token is ours, and callers compare `valid_until` against
//! the clock. Refresh semantics depend on this split: a well-formed but
//! expired token still decodes.
//!
//! Nothing is persisted and there is no revocation list: a token stays
//! usable for its full window even if the account changes afterwards.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use jobboard_models::Account;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub const TOKEN_TYPE: &str = "Bearer";

/// Purpose tag carried in every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Signed claim set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account email.
    pub sub: String,
    /// Absolute expiry, unix seconds. A custom claim; the registered `exp`
    /// is not used.
    pub valid_until: i64,
    pub kind: TokenKind,
}

impl Claims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.valid_until <= now
    }
}

/// A freshly minted access+refresh pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
}

/// Issues and validates bearer tokens. A pure function of the secret key
/// and the clock.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    header: Header,
    validation: Validation,
    access_window: Duration,
    refresh_window: Duration,
}

impl TokenService {
    pub fn new(config: &ApiConfig) -> Self {
        let mut validation = Validation::new(config.token_algorithm);
        // Expiry lives in the custom claim and is checked by callers.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret_key.as_bytes()),
            header: Header::new(config.token_algorithm),
            validation,
            access_window: Duration::minutes(config.access_token_expire_minutes),
            refresh_window: Duration::minutes(config.refresh_token_expire_minutes),
        }
    }

    /// Sign a token for the given subject with the kind's expiry window.
    pub fn issue(&self, subject: &str, kind: TokenKind) -> ApiResult<String> {
        let window = match kind {
            TokenKind::Access => self.access_window,
            TokenKind::Refresh => self.refresh_window,
        };
        let claims = Claims {
            sub: subject.to_string(),
            valid_until: (Utc::now() + window).timestamp(),
            kind,
        };
        encode(&self.header, &claims, &self.encoding)
            .map_err(|err| ApiError::internal(format!("failed to sign token: {err}")))
    }

    /// Mint a matched access+refresh pair for the subject.
    pub fn issue_pair(&self, subject: &str) -> ApiResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue(subject, TokenKind::Access)?,
            refresh_token: self.issue(subject, TokenKind::Refresh)?,
            token_type: TOKEN_TYPE,
        })
    }

    /// Verify the signature and decode the claims.
    ///
    /// Expiry is NOT checked here: a tampered or foreign token fails, a
    /// well-formed but expired one decodes successfully.
    pub fn validate(&self, token: &str) -> ApiResult<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| ApiError::unauthorized("Credentials are not valid"))
    }

    /// Exchange a still-valid token for a fresh access+refresh pair bound
    /// to the same subject. Both tokens are always re-minted together.
    pub fn refresh(&self, token: &str) -> ApiResult<TokenPair> {
        let claims = self.validate(token)?;
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(ApiError::unauthorized("Credentials are not valid"));
        }
        self.issue_pair(&claims.sub)
    }
}

/// Authenticated account extracted from the Authorization header.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.tokens.validate(token)?;
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(ApiError::unauthorized("Token expired"));
        }

        let account = state
            .accounts
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Credentials are not valid"))?;

        Ok(CurrentAccount(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

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

    fn service() -> TokenService {
        TokenService::new(&test_config())
    }

    /// Sign claims directly, bypassing the service's expiry windows.
    fn sign_raw(config: &ApiConfig, claims: &Claims) -> String {
        encode(
            &Header::new(config.token_algorithm),
            claims,
            &EncodingKey::from_secret(config.secret_key.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issue_validate_round_trip() {
        let tokens = service();
        let token = tokens.issue("ivanov@example.com", TokenKind::Access).unwrap();
        let claims = tokens.validate(&token).unwrap();

        assert_eq!(claims.sub, "ivanov@example.com");
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(!claims.is_expired_at(Utc::now().timestamp()));
    }

    #[test]
    fn refresh_window_outlives_access_window() {
        let tokens = service();
        let access = tokens.issue("a@example.com", TokenKind::Access).unwrap();
        let refresh = tokens.issue("a@example.com", TokenKind::Refresh).unwrap();

        let access_until = tokens.validate(&access).unwrap().valid_until;
        let refresh_until = tokens.validate(&refresh).unwrap().valid_until;
        assert!(refresh_until > access_until);
    }

    #[test]
    fn tampered_token_fails_validation() {
        let tokens = service();
        let token = tokens.issue("a@example.com", TokenKind::Access).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(tokens.validate(&tampered).is_err());
        assert!(tokens.validate("not-a-token").is_err());
    }

    #[test]
    fn foreign_secret_fails_validation() {
        let tokens = service();
        let mut other_config = test_config();
        other_config.secret_key = "a-different-secret".to_string();
        let foreign = TokenService::new(&other_config)
            .issue("a@example.com", TokenKind::Access)
            .unwrap();

        assert!(tokens.validate(&foreign).is_err());
    }

    #[test]
    fn expired_token_still_passes_signature_validation() {
        // The two-step shape: validate() proves authorship only, the
        // expiry comparison is a separate concern.
        let config = test_config();
        let tokens = TokenService::new(&config);
        let expired = sign_raw(
            &config,
            &Claims {
                sub: "a@example.com".to_string(),
                valid_until: Utc::now().timestamp() - 600,
                kind: TokenKind::Refresh,
            },
        );

        let claims = tokens.validate(&expired).unwrap();
        assert!(claims.is_expired_at(Utc::now().timestamp()));
    }

    #[test]
    fn refresh_rejects_expired_tokens() {
        let config = test_config();
        let tokens = TokenService::new(&config);
        let expired = sign_raw(
            &config,
            &Claims {
                sub: "a@example.com".to_string(),
                valid_until: Utc::now().timestamp() - 600,
                kind: TokenKind::Refresh,
            },
        );

        let err = tokens.refresh(&expired).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn refresh_mints_a_new_pair_for_the_same_subject() {
        let tokens = service();
        let refresh = tokens.issue("ivanov@example.com", TokenKind::Refresh).unwrap();

        let pair = tokens.refresh(&refresh).unwrap();
        assert_eq!(pair.token_type, TOKEN_TYPE);

        let access_claims = tokens.validate(&pair.access_token).unwrap();
        let refresh_claims = tokens.validate(&pair.refresh_token).unwrap();
        assert_eq!(access_claims.sub, "ivanov@example.com");
        assert_eq!(refresh_claims.sub, "ivanov@example.com");
        assert_eq!(access_claims.kind, TokenKind::Access);
        assert_eq!(refresh_claims.kind, TokenKind::Refresh);
    }
}
