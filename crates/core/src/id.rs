// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracking ID generation for new reports.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Prefix shared by every tracking ID.
pub const TRACKING_PREFIX: &str = "SF";

/// Number of hash characters in a tracking ID.
const HASH_LEN: usize = 9;

/// Generate a tracking ID from title and timestamp.
/// Format: SF-{hash} where hash is the first 9 uppercase hex chars of SHA256(title + timestamp)
pub fn tracking_id(title: &str, reported_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, reported_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    let mut short_hash = hex::encode_upper(&hash[..5]);
    short_hash.truncate(HASH_LEN);
    format!("{}-{}", TRACKING_PREFIX, short_hash)
}

/// Generate a tracking ID that `exists` rejects, appending `-2`, `-3`, ... on collision.
pub fn unique_tracking_id<F>(title: &str, reported_at: &DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = tracking_id(title, reported_at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
