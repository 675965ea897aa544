// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! spotfix-core: in-memory registry for civic issue reports
//!
//! This crate provides the issue data model, the [`Registry`] that owns a
//! collection of issues, filter [`Criteria`], and the aggregate statistics
//! behind the SpotFix dashboard and live map.
//!
//! ```rust,ignore
//! use spotfix_core::{dataset, Criteria, Status};
//!
//! let mut registry = dataset::demo();
//! let assigned = registry.filter(&Criteria::any().status(Status::Assigned));
//! registry.update_status("SF-GHI789", Status::Assigned, Some("Lighting Crew"))?;
//! ```

pub mod criteria;
pub mod dataset;
pub mod error;
pub mod id;
pub mod issue;
pub mod registry;
pub mod shared;
pub mod stats;

pub use criteria::{Constraint, Criteria};
pub use error::{Error, Result};
pub use issue::{Category, Coordinates, Issue, Location, Severity, Status};
pub use registry::{NewReport, Registry};
pub use shared::SharedRegistry;
pub use stats::{CategoryShare, Hotspot, SeverityCounts, StatusCounts, Summary};
