//! Error types for rule construction.
//!
//! Everything that can go wrong is a configuration problem: it surfaces
//! while a rule table is being built, before any text is scanned.
//! `parse` itself never fails.

use thiserror::Error;

/// Result type alias for rule-construction operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Error raised while building a [`PatternRule`](crate::PatternRule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A symbolic type name did not resolve against the built-in registry.
    #[error("'{name}' is not a supported pattern type")]
    UnknownType { name: String },

    /// A rule declared neither a built-in type nor an explicit pattern.
    #[error("rule declares neither a pattern nor a built-in type")]
    MissingPattern,

    /// A literal pattern was the empty string, which can never claim text.
    #[error("literal pattern must not be empty")]
    EmptyLiteral,

    /// A regex pattern failed to compile.
    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

impl RuleError {
    pub(crate) fn invalid_regex(pattern: &str, err: regex::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}
