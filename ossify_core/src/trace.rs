// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the walk.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! walker and session call as the skeleton is generated. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use kurbo::{Point, Size};

use crate::classify::Decision;
use crate::scene::NodeKind;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for every node the walk reaches, after classification.
#[derive(Clone, Copy, Debug)]
pub struct VisitEvent<'a> {
    /// The node's display name.
    pub name: &'a str,
    /// The node's kind.
    pub kind: NodeKind,
    /// Recursion depth; the walk root is depth 0.
    pub depth: usize,
    /// The classifier's decision for this node.
    pub decision: Decision,
}

/// Emitted when a placeholder is appended to the output frame.
#[derive(Clone, Copy, Debug)]
pub struct PlaceholderEvent {
    /// Position in the output frame's local space.
    pub position: Point,
    /// Placeholder size.
    pub size: Size,
    /// Index in the output frame's child list.
    pub index: usize,
}

/// Emitted once per session after a skeleton is built, before commit.
#[derive(Clone, Copy, Debug)]
pub struct SkeletonEvent<'a> {
    /// The output frame's name.
    pub name: &'a str,
    /// The output frame's size.
    pub size: Size,
    /// Number of placeholders emitted.
    pub placeholders: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the walk and session.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for each visited node, after classification.
    fn on_visit(&mut self, e: &VisitEvent<'_>) {
        _ = e;
    }

    /// Called when a placeholder is emitted.
    fn on_placeholder(&mut self, e: &PlaceholderEvent) {
        _ = e;
    }

    /// Called once the skeleton is fully built.
    fn on_skeleton(&mut self, e: &SkeletonEvent<'_>) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`VisitEvent`].
    #[inline]
    pub fn visit(&mut self, e: &VisitEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_visit(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PlaceholderEvent`].
    #[inline]
    pub fn placeholder(&mut self, e: &PlaceholderEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_placeholder(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SkeletonEvent`].
    #[inline]
    pub fn skeleton(&mut self, e: &SkeletonEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_skeleton(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_visit() -> VisitEvent<'static> {
        VisitEvent {
            name: "card",
            kind: NodeKind::Frame,
            depth: 0,
            decision: Decision::Descend,
        }
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_visit(&sample_visit());
        sink.on_placeholder(&PlaceholderEvent {
            position: Point::ZERO,
            size: Size::new(1.0, 1.0),
            index: 0,
        });
        sink.on_skeleton(&SkeletonEvent {
            name: "card - Skeleton Loader",
            size: Size::new(10.0, 10.0),
            placeholders: 3,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.visit(&sample_visit());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            depths: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_visit(&mut self, e: &VisitEvent<'_>) {
                self.depths.push(e.depth);
            }
        }

        let mut sink = RecordingSink { depths: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.visit(&sample_visit());
        drop(tracer);
        assert_eq!(sink.depths, &[0]);
    }
}
