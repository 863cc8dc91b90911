//! Account models.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Account kind. A closed two-variant tag: companies post jobs, applicants
/// respond to them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "account_kind", rename_all = "snake_case")]
pub enum AccountKind {
    #[default]
    Applicant,
    Company,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Applicant => "applicant",
            AccountKind::Company => "company",
        }
    }

    pub fn is_company(&self) -> bool {
        matches!(self, AccountKind::Company)
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
pub struct Account {
    pub id: i64,

    /// Unique across all accounts.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Bcrypt digest. Never serialized into responses.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub kind: AccountKind,

    pub created_at: DateTime<Utc>,
}

/// Insert payload for the accounts table.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub kind: AccountKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AccountKind::Applicant).unwrap(),
            "\"applicant\""
        );
        assert_eq!(
            serde_json::to_string(&AccountKind::Company).unwrap(),
            "\"company\""
        );
    }

    #[test]
    fn default_kind_is_applicant() {
        assert_eq!(AccountKind::default(), AccountKind::Applicant);
        assert!(!AccountKind::default().is_company());
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let account = Account {
            id: 1,
            email: "ivanov@example.com".to_string(),
            name: "Ivanov".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            kind: AccountKind::Company,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret"));
    }
}
