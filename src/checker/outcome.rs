// src/checker/outcome.rs
// =============================================================================
// The result of checking one local or external link.
// =============================================================================

use serde::Serialize;

use super::classify::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    /// Human readable, e.g. "HTTP 200" or "File not found: /docs/a.md"
    pub reason: String,
    pub category: Category,
}

impl ValidationOutcome {
    pub fn valid(category: Category, reason: impl Into<String>) -> Self {
        Self {
            valid: true,
            reason: reason.into(),
            category,
        }
    }

    pub fn invalid(category: Category, reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
            category,
        }
    }
}
