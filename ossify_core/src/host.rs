// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for document integrations.
//!
//! Ossify does not own a document. The design tool (or a test double) does,
//! and exposes it through this trait — the core's entire I/O surface:
//!
//! - **Read** — the current selection, as a snapshot of [`SceneNode`]
//!   values. Only the first selected node is ever consumed.
//! - **Write** — [`commit`](Host::commit): materialize one generated
//!   [`SkeletonFrame`] in the document. How that maps to native primitives
//!   (create a frame, create one rectangle per placeholder, append children
//!   in order) is the backend's business; the core only guarantees that the
//!   value it hands over is complete and ordered.
//! - **Notify** — a fire-and-forget user-facing message channel.
//! - **Terminate** — [`close`](Host::close) ends the session. The driver
//!   calls it exactly once per invocation, as the last action on every exit
//!   path.
//!
//! # Session pseudocode
//!
//! A host binding wires the pieces together like this:
//!
//! ```rust,ignore
//! fn on_plugin_run(host: &mut impl Host) {
//!     let mut sink = PrettyPrintSink::stderr();
//!     let outcome = session::run(
//!         host,
//!         &SkeletonStyle::default(),
//!         &mut Tracer::new(&mut sink),
//!     );
//!     // `run` has already notified and closed; `outcome` is for logging.
//! }
//! ```
//!
//! Unexpected host failures (resource exhaustion while committing, say) are
//! the host's own problem to surface; nothing here catches them.

use crate::scene::SceneNode;
use crate::skeleton::SkeletonFrame;

/// The document boundary a backend implements.
pub trait Host {
    /// The current selection, in selection order. May be empty.
    fn selection(&self) -> &[SceneNode];

    /// Applies a generated skeleton to the document: one new container plus
    /// its placeholder children, insertion order preserved.
    fn commit(&mut self, skeleton: SkeletonFrame);

    /// Shows a user-facing message. Fire-and-forget.
    fn notify(&mut self, message: &str);

    /// Ends the session.
    fn close(&mut self);
}
