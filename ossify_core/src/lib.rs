// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skeleton-loader generation for hierarchical design documents.
//!
//! `ossify_core` turns a selected node of a design-document tree into a
//! sibling frame of simplified rounded-gray placeholders: relative layout is
//! preserved, visual detail (icons, text, fine shapes) collapses into blocks.
//! It is `no_std` compatible (with `alloc`) and performs a single synchronous
//! depth-first pass over an externally-owned tree.
//!
//! # Architecture
//!
//! The crate is organized around one pipeline with no backward edges:
//!
//! ```text
//!   Host::selection()
//!       │
//!       ▼
//!   session::run ──► classify ──► walk ──► skeleton::emit
//!                                              │
//!                 ┌────────────────────────────┘
//!                 ▼
//!   SkeletonFrame ──► Host::commit() ──► Host::notify() ──► Host::close()
//! ```
//!
//! **[`scene`]** — The read-only node model: a [`NodeKind`](scene::NodeKind)
//! sum type plus optional capability fields (opacity, size, children) with
//! presence queries, mirroring the duck-typed narrowing of design-tool APIs.
//!
//! **[`classify`]** — Pure predicates deciding, per node, whether the walk
//! prunes it, emits one terminal placeholder, descends into children, or
//! skips it.
//!
//! **[`geometry`]** — Maps a node's absolute transform into the output
//! frame's local space. Translation only; rotation and skew are ignored.
//!
//! **[`skeleton`]** — The output value: a [`SkeletonFrame`](skeleton::SkeletonFrame)
//! owning [`Placeholder`](skeleton::Placeholder) children in emission order,
//! plus the emitter that appends them.
//!
//! **[`walk`]** — Recursive depth-first pre-order traversal applying
//! classifier decisions and invoking the emitter.
//!
//! **[`session`]** — The driver: validates the selection, builds the output
//! frame, runs the walk once, and reports the outcome through the host.
//!
//! **[`host`]** — The [`Host`](host::Host) trait that document backends
//! implement to expose the selection and apply generated skeletons.
//!
//! **[`style`]** — Fixed placeholder styling (corner radius, fills, gap)
//! as a plain struct with spec'd defaults.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! walk instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod classify;
pub mod geometry;
pub mod host;
pub mod scene;
pub mod session;
pub mod skeleton;
pub mod style;
pub mod trace;
pub mod walk;
