// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the spotfix CLI.
///
/// Registry errors pass through unchanged so their hints reach the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] spotfix_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}\n  hint: check --config or SPOTFIX_CONFIG")]
    ConfigNotFound(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("--lat and --lng must be given together")]
    PartialCoordinates,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for spotfix CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
