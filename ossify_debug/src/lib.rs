// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for ossify diagnostics.
//!
//! This crate provides development-time views of a skeleton-generation pass:
//!
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](ossify_core::trace::TraceSink) writing one
//!   human-readable line per walk event.
//! - [`json::skeleton_to_json`] — serializes a generated
//!   [`SkeletonFrame`](ossify_core::skeleton::SkeletonFrame) for inspection
//!   or snapshotting.

pub mod json;
pub mod pretty;
