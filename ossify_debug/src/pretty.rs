// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable walk output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr),
//! indented by recursion depth so the walk reads like the source layer list.

use std::io::Write;

use ossify_core::classify::Decision;
use ossify_core::trace::{PlaceholderEvent, SkeletonEvent, TraceSink, VisitEvent};

/// Writes human-readable walk lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the destination.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn decision_name(decision: Decision) -> &'static str {
    match decision {
        Decision::Prune => "prune",
        Decision::Button => "button",
        Decision::IconContainer => "icon",
        Decision::Descend => "descend",
        Decision::Skip => "skip",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_visit(&mut self, e: &VisitEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[visit] {:indent$}{:?} {:?} -> {}",
            "",
            e.kind,
            e.name,
            decision_name(e.decision),
            indent = e.depth * 2,
        );
    }

    fn on_placeholder(&mut self, e: &PlaceholderEvent) {
        let _ = writeln!(
            self.writer,
            "[emit] #{} {}x{} at ({}, {})",
            e.index, e.size.width, e.size.height, e.position.x, e.position.y,
        );
    }

    fn on_skeleton(&mut self, e: &SkeletonEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[skeleton] {:?} {}x{} placeholders={}",
            e.name, e.size.width, e.size.height, e.placeholders,
        );
    }
}

#[cfg(test)]
mod tests {
    use ossify_core::scene::NodeKind;

    use super::*;

    #[test]
    fn visit_lines_are_indented_by_depth() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_visit(&VisitEvent {
            name: "card",
            kind: NodeKind::Frame,
            depth: 0,
            decision: Decision::Descend,
        });
        sink.on_visit(&VisitEvent {
            name: "Button",
            kind: NodeKind::Group,
            depth: 2,
            decision: Decision::Button,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[visit] Frame \"card\" -> descend"), "got: {output}");
        assert!(
            output.contains("[visit]     Group \"Button\" -> button"),
            "got: {output}"
        );
    }

    #[test]
    fn emit_line_shows_geometry() {
        use kurbo::{Point, Size};

        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_placeholder(&PlaceholderEvent {
            position: Point::new(20.0, 30.0),
            size: Size::new(50.0, 20.0),
            index: 0,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[emit] #0 50x20 at (20, 30)"), "got: {output}");
    }
}
