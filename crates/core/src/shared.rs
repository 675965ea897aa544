// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe handle to a registry.
//!
//! Each call holds the lock for its whole duration, so
//! [`SharedRegistry::update_status`] is a single read-check-write step that
//! cannot interleave with another update.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::criteria::Criteria;
use crate::error::Result;
use crate::issue::{Issue, Status};
use crate::registry::{NewReport, Registry};
use crate::stats::{CategoryShare, StatusCounts};

/// Cloneable, lock-guarded registry for concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Wraps a registry for shared use.
    pub fn new(registry: Registry) -> Self {
        SharedRegistry {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    // A panic in another holder cannot leave the registry half-updated:
    // every mutation validates before it writes.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Registry::update_status`].
    pub fn update_status(
        &self,
        id: &str,
        new_status: Status,
        assignee: Option<&str>,
    ) -> Result<Issue> {
        self.lock().update_status(id, new_status, assignee)
    }

    /// See [`Registry::report`].
    pub fn report(&self, report: NewReport) -> Result<Issue> {
        self.lock().report(report)
    }

    /// See [`Registry::filter`].
    pub fn filter(&self, criteria: &Criteria) -> Vec<Issue> {
        self.lock().filter(criteria)
    }

    /// See [`Registry::status_counts`].
    pub fn status_counts(&self) -> StatusCounts {
        self.lock().status_counts()
    }

    /// See [`Registry::category_breakdown`].
    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        self.lock().category_breakdown()
    }

    /// Owned copy of the registry as it is right now.
    pub fn snapshot(&self) -> Registry {
        self.lock().clone()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        SharedRegistry::new(registry)
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
