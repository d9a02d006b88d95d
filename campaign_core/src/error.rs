//! Rule evaluation errors

use thiserror::Error;

/// Error raised by rule calculations and record access checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Input outside the documented domain with no sensible default
    #[error("Validation error: {0}")]
    Validation(String),
    /// Name or identifier missing from a fixed catalog or list
    #[error("Lookup failed: {0}")]
    Lookup(String),
    /// Record belongs to a different user
    #[error("Access denied: record owned by '{owner}', requested by '{user}'")]
    AccessDenied { owner: String, user: String },
}
