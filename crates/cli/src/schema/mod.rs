// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output structures.
//!
//! Commands serialize these with `-o json`, and `spotfix schema` derives
//! their JSON Schema, so the two cannot drift apart. Issue, status and
//! statistics types come from `spotfix-core` with its `schemars` feature.

pub mod list;
pub mod show;
pub mod stats;
