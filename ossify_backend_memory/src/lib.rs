// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document host.
//!
//! [`MemoryHost`] implements [`Host`] against a plain vector of document
//! nodes instead of a live design tool. It is the reference backend: tests
//! assert against it, and the demo binary uses it to show a full session
//! without any plugin runtime.
//!
//! Committing a skeleton materializes real node records — one
//! [`DocumentNode::Frame`] appended to the page, one
//! [`DocumentNode::Rectangle`] child per placeholder, insertion order
//! preserved — so "zero nodes created" and "exactly N rectangles" are
//! directly observable, matching what a native backend would do with its
//! create-frame/create-rectangle/append primitives.

use kurbo::{Point, Size};

use ossify_core::host::Host;
use ossify_core::scene::SceneNode;
use ossify_core::skeleton::SkeletonFrame;
use ossify_core::style::Paint;

/// A node created in the in-memory document.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentNode {
    /// A container frame.
    Frame {
        /// Frame name.
        name: String,
        /// Document-space position.
        position: Point,
        /// Frame size.
        size: Size,
        /// Background fill.
        fill: Paint,
        /// Child nodes, in insertion order.
        children: Vec<DocumentNode>,
    },
    /// A rectangle shape.
    Rectangle {
        /// Position in the parent frame's local space.
        position: Point,
        /// Rectangle size.
        size: Size,
        /// Corner radius.
        corner_radius: f64,
        /// Fill paint.
        fill: Paint,
    },
}

impl DocumentNode {
    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Frame { children, .. } => {
                1 + children.iter().map(Self::node_count).sum::<usize>()
            }
            Self::Rectangle { .. } => 1,
        }
    }
}

/// A [`Host`] over an in-memory page.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    selection: Vec<SceneNode>,
    page: Vec<DocumentNode>,
    notifications: Vec<String>,
    closes: usize,
}

impl MemoryHost {
    /// Creates a host with an empty page and empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host with the given selection.
    #[must_use]
    pub fn with_selection(selection: Vec<SceneNode>) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Replaces the current selection.
    pub fn select(&mut self, selection: Vec<SceneNode>) {
        self.selection = selection;
    }

    /// Top-level nodes created on the page, in creation order.
    #[must_use]
    pub fn page(&self) -> &[DocumentNode] {
        &self.page
    }

    /// Messages shown to the user, in order.
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// How many times the session was closed.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.closes
    }

    /// Total number of nodes created across the page.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.page.iter().map(DocumentNode::node_count).sum()
    }
}

impl Host for MemoryHost {
    fn selection(&self) -> &[SceneNode] {
        &self.selection
    }

    fn commit(&mut self, skeleton: SkeletonFrame) {
        let children = skeleton
            .placeholders
            .iter()
            .map(|p| DocumentNode::Rectangle {
                position: p.position,
                size: p.size,
                corner_radius: p.corner_radius,
                fill: p.fill,
            })
            .collect();
        self.page.push(DocumentNode::Frame {
            name: skeleton.name,
            position: skeleton.position,
            size: skeleton.size,
            fill: skeleton.fill,
            children,
        });
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

#[cfg(test)]
mod tests {
    use ossify_core::scene::NodeKind;
    use ossify_core::session::{self, MSG_EMPTY_SELECTION, MSG_INVALID_ROOT, MSG_SUCCESS};
    use ossify_core::style::{Rgb, SkeletonStyle};
    use ossify_core::trace::Tracer;

    use super::*;

    fn run(host: &mut MemoryHost) -> Result<session::SessionSummary, session::SessionError> {
        session::run(host, &SkeletonStyle::default(), &mut Tracer::none())
    }

    #[test]
    fn empty_selection_creates_no_nodes() {
        let mut host = MemoryHost::new();
        assert!(run(&mut host).is_err());
        assert_eq!(host.node_count(), 0);
        assert_eq!(host.notifications(), [MSG_EMPTY_SELECTION.to_string()]);
        assert_eq!(host.close_count(), 1);
    }

    #[test]
    fn shape_root_creates_no_nodes() {
        let mut host = MemoryHost::with_selection(vec![
            SceneNode::new(NodeKind::Text, "caption").with_size(80.0, 14.0),
        ]);
        assert!(run(&mut host).is_err());
        assert_eq!(host.node_count(), 0);
        assert_eq!(host.notifications(), [MSG_INVALID_ROOT.to_string()]);
        assert_eq!(host.close_count(), 1);
    }

    #[test]
    fn committed_skeleton_materializes_frame_and_rectangles() {
        let root = SceneNode::new(NodeKind::Frame, "Card")
            .with_size(100.0, 80.0)
            .at(10.0, 10.0)
            .with_children(vec![
                SceneNode::new(NodeKind::Rectangle, "bg")
                    .with_size(50.0, 20.0)
                    .at(10.0, 10.0),
                SceneNode::new(NodeKind::Text, "title")
                    .with_size(60.0, 14.0)
                    .at(15.0, 40.0),
            ]);
        let mut host = MemoryHost::with_selection(vec![root]);

        let summary = run(&mut host).unwrap();
        assert_eq!(summary.placeholders, 2);
        assert_eq!(host.notifications(), [MSG_SUCCESS.to_string()]);
        assert_eq!(host.close_count(), 1);

        // One frame plus two rectangles.
        assert_eq!(host.node_count(), 3);
        let DocumentNode::Frame {
            name,
            position,
            size,
            fill,
            children,
        } = &host.page()[0]
        else {
            panic!("expected a frame at the top of the page");
        };
        assert_eq!(name, "Card - Skeleton Loader");
        assert_eq!(*position, Point::new(360.0, 10.0));
        assert_eq!(*size, Size::new(100.0, 80.0));
        assert_eq!(*fill, Paint::Solid(Rgb::WHITE));

        let DocumentNode::Rectangle { position, size, .. } = &children[0] else {
            panic!("expected a rectangle child");
        };
        assert_eq!(*position, Point::ZERO);
        assert_eq!(*size, Size::new(50.0, 20.0));

        let DocumentNode::Rectangle { position, .. } = &children[1] else {
            panic!("expected a rectangle child");
        };
        assert_eq!(*position, Point::new(5.0, 30.0));
    }

    #[test]
    fn repeated_sessions_accumulate_frames() {
        let root = SceneNode::new(NodeKind::Frame, "Card")
            .with_size(40.0, 40.0)
            .with_children(vec![]);
        let mut host = MemoryHost::with_selection(vec![root]);

        run(&mut host).unwrap();
        run(&mut host).unwrap();

        assert_eq!(host.page().len(), 2);
        assert_eq!(host.close_count(), 2);
    }
}
