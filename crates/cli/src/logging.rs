// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! The filter comes from `SPOTFIX_LOG` when set, otherwise from the config's
//! `log_level`. Stdout stays reserved for command output.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Build the filter for this process.
///
/// An unparsable directive falls back to `warn` rather than failing the
/// command.
pub fn filter(env_directive: Option<&str>, config: &Config) -> EnvFilter {
    let directive = env_directive.unwrap_or(&config.log_level);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: &Config) {
    let env_directive = crate::env::log_filter();
    let filter = filter(env_directive.as_deref(), config);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
