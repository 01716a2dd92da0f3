// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session driver.
//!
//! One invocation = one synchronous pass: read the selection, validate it,
//! build the output frame, walk the root once, commit, notify, close.
//! Expected failures are values plus a user notification, never panics, and
//! [`Host::close`] runs as the last action on every exit path. There is no
//! retry; the operation is attempted exactly once.

use alloc::string::String;
use core::fmt;

use crate::classify;
use crate::host::Host;
use crate::scene::NodeKind;
use crate::skeleton::SkeletonFrame;
use crate::style::SkeletonStyle;
use crate::trace::{SkeletonEvent, Tracer};
use crate::walk;

/// Shown when nothing is selected.
pub const MSG_EMPTY_SELECTION: &str =
    "Please select a frame or group to generate a skeleton loader.";

/// Shown when the first selected node cannot act as a walk root.
pub const MSG_INVALID_ROOT: &str =
    "Selected node must be a Frame, Group, Component, or Instance.";

/// Shown after a successful pass.
pub const MSG_SUCCESS: &str = "Skeleton loader created successfully!";

/// Why a session ended without generating anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The selection was empty.
    EmptySelection,
    /// The first selected node is not of a traversable kind.
    UntraversableRoot(NodeKind),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => f.write_str("selection is empty"),
            Self::UntraversableRoot(kind) => {
                write!(f, "selected {kind:?} node cannot be a skeleton root")
            }
        }
    }
}

/// What a successful session produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Name of the committed output frame.
    pub frame_name: String,
    /// Number of placeholders emitted.
    pub placeholders: usize,
}

/// Runs one skeleton-generation session against `host`.
///
/// Only the first selected node is considered; additional selected nodes are
/// ignored. On any outcome the user has been notified and the session closed
/// by the time this returns — the `Result` exists for callers that log or
/// test, not for control flow the user sees.
pub fn run<H: Host + ?Sized>(
    host: &mut H,
    style: &SkeletonStyle,
    tracer: &mut Tracer<'_>,
) -> Result<SessionSummary, SessionError> {
    let root = host.selection().first().cloned();
    let Some(root) = root else {
        host.notify(MSG_EMPTY_SELECTION);
        host.close();
        return Err(SessionError::EmptySelection);
    };

    if !classify::is_traversable(&root) {
        host.notify(MSG_INVALID_ROOT);
        host.close();
        return Err(SessionError::UntraversableRoot(root.kind));
    }

    let mut frame = SkeletonFrame::for_root(&root, style);
    let origin = root.absolute_transform.translation();
    walk::walk(&root, &mut frame, origin, style, tracer);

    tracer.skeleton(&SkeletonEvent {
        name: &frame.name,
        size: frame.size,
        placeholders: frame.placeholders.len(),
    });

    let summary = SessionSummary {
        frame_name: frame.name.clone(),
        placeholders: frame.placeholders.len(),
    };
    host.commit(frame);
    host.notify(MSG_SUCCESS);
    host.close();
    Ok(summary)
}
