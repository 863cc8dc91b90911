//! Offset pagination parameters.

use schemars::JsonSchema;
use serde::Deserialize;

/// Limit/skip pagination for list operations.
///
/// No upper bound is enforced on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct Page {
    #[serde(default = "Page::default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub skip: i64,
}

impl Page {
    fn default_limit() -> i64 {
        100
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            skip: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_limit_100_skip_0() {
        let page: Page = serde_json::from_str("{}").unwrap();
        assert_eq!(page, Page { limit: 100, skip: 0 });
        assert_eq!(Page::default(), page);
    }

    #[test]
    fn explicit_values_are_kept() {
        let page: Page = serde_json::from_str(r#"{"limit": 5, "skip": 20}"#).unwrap();
        assert_eq!(page, Page { limit: 5, skip: 20 });
    }
}
