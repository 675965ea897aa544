// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for spotfix-core operations.

use thiserror::Error;

/// All possible errors that can occur in spotfix-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("invalid status transition: cannot go from {from} to {to}\n  hint: from '{from}' you can go to: {valid_targets}")]
    InvalidTransition {
        from: String,
        to: String,
        valid_targets: String,
    },

    #[error("issue {id} needs an assignee to become {status}\n  hint: pass the crew or team taking the work")]
    AssigneeRequired { id: String, status: String },

    #[error("invalid criteria: {0}\n  hint: recognized fields are: category, status, severity (use 'all' for no constraint)")]
    InvalidCriteria(String),

    #[error("duplicate issue id: {0}")]
    DuplicateId(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: reported, assigned, resolved")]
    InvalidStatus(String),

    #[error("invalid category: '{0}'\n  hint: valid categories are: pothole, garbage, electricity, water, signage, other")]
    InvalidCategory(String),

    #[error("invalid severity: '{0}'\n  hint: valid severities are: low, medium, high")]
    InvalidSeverity(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for spotfix-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
