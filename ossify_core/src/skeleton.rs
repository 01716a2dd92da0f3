// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generated skeleton and its placeholder emitter.
//!
//! The walk does not touch the host document directly. It builds a
//! [`SkeletonFrame`] value — one output frame owning [`Placeholder`]s in
//! emission order — which the host then [`commit`](crate::host::Host::commit)s
//! to the document in a single step.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};

use crate::classify;
use crate::geometry;
use crate::scene::SceneNode;
use crate::style::{Paint, SkeletonStyle};
use crate::trace::{PlaceholderEvent, Tracer};

/// One rectangular placeholder standing in for a source node's bounds.
///
/// Created once, never mutated afterward; ownership passes to the owning
/// [`SkeletonFrame`] at emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placeholder {
    /// Position in the output frame's local space.
    pub position: Point,
    /// Width and height, copied from the source node.
    pub size: Size,
    /// Corner radius.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Paint,
}

/// The output frame: a new sibling container holding all placeholders.
///
/// Placed to the right of the source root, sized to match it, and named
/// after it. Placeholder order is emission order, which is depth-first
/// document order of the walked tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SkeletonFrame {
    /// `"<root name> - Skeleton Loader"`.
    pub name: String,
    /// Document-space position of the frame's top-left corner.
    pub position: Point,
    /// Frame size, matching the source root.
    pub size: Size,
    /// Background fill.
    pub fill: Paint,
    /// Emitted placeholders, in emission order.
    pub placeholders: Vec<Placeholder>,
}

impl SkeletonFrame {
    /// Creates the empty output frame for a walk rooted at `root`.
    ///
    /// The frame sits `style.gap` units to the right of the root's bounds at
    /// the same vertical position. A root with no size (malformed input)
    /// yields a zero-sized frame rather than a failure.
    #[must_use]
    pub fn for_root(root: &SceneNode, style: &SkeletonStyle) -> Self {
        let size = root.size.unwrap_or(Size::ZERO);
        let origin = root.absolute_transform.translation();
        Self {
            name: format!("{} - Skeleton Loader", root.name),
            position: Point::new(origin.x + size.width + style.gap, origin.y),
            size,
            fill: style.frame_fill,
            placeholders: Vec::new(),
        }
    }
}

/// Emits one placeholder for `node` into `frame`.
///
/// Callers are expected to have ruled out hidden nodes already; the check is
/// repeated here so a stray call is a no-op rather than a stray gray block.
/// Nodes without a size are skipped silently — the walk never aborts because
/// one subtree is malformed.
pub fn emit(
    node: &SceneNode,
    frame: &mut SkeletonFrame,
    origin: Vec2,
    style: &SkeletonStyle,
    tracer: &mut Tracer<'_>,
) {
    if classify::is_effectively_hidden(node) {
        return;
    }
    let Some(size) = node.size else {
        return;
    };

    let placeholder = Placeholder {
        position: geometry::local_position(node.absolute_transform, origin),
        size,
        corner_radius: style.corner_radius,
        fill: style.placeholder_fill,
    };
    tracer.placeholder(&PlaceholderEvent {
        position: placeholder.position,
        size: placeholder.size,
        index: frame.placeholders.len(),
    });
    frame.placeholders.push(placeholder);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeKind, SceneNode};

    fn style() -> SkeletonStyle {
        SkeletonStyle::default()
    }

    #[test]
    fn frame_sits_right_of_root() {
        let root = SceneNode::new(NodeKind::Frame, "Card")
            .with_size(100.0, 80.0)
            .at(10.0, 10.0);
        let frame = SkeletonFrame::for_root(&root, &style());
        assert_eq!(frame.name, "Card - Skeleton Loader");
        assert_eq!(frame.position, Point::new(360.0, 10.0));
        assert_eq!(frame.size, Size::new(100.0, 80.0));
        assert!(frame.placeholders.is_empty());
    }

    #[test]
    fn sizeless_root_yields_zero_sized_frame() {
        let root = SceneNode::new(NodeKind::Group, "odd").at(5.0, 5.0);
        let frame = SkeletonFrame::for_root(&root, &style());
        assert_eq!(frame.size, Size::ZERO);
        assert_eq!(frame.position, Point::new(255.0, 5.0));
    }

    #[test]
    fn emit_positions_relative_to_origin() {
        let root = SceneNode::new(NodeKind::Frame, "root")
            .with_size(200.0, 200.0)
            .at(10.0, 10.0);
        let node = SceneNode::new(NodeKind::Rectangle, "r")
            .with_size(50.0, 20.0)
            .at(30.0, 40.0);
        let mut frame = SkeletonFrame::for_root(&root, &style());
        let origin = root.absolute_transform.translation();

        emit(&node, &mut frame, origin, &style(), &mut Tracer::none());

        assert_eq!(frame.placeholders.len(), 1);
        let p = frame.placeholders[0];
        assert_eq!(p.position, Point::new(20.0, 30.0));
        assert_eq!(p.size, Size::new(50.0, 20.0));
        assert_eq!(p.corner_radius, 6.0);
        assert_eq!(p.fill, style().placeholder_fill);
    }

    #[test]
    fn emit_refuses_hidden_node() {
        let node = SceneNode::new(NodeKind::Rectangle, "r")
            .with_size(10.0, 10.0)
            .hidden();
        let root = SceneNode::new(NodeKind::Frame, "root").with_size(10.0, 10.0);
        let mut frame = SkeletonFrame::for_root(&root, &style());

        emit(
            &node,
            &mut frame,
            Vec2::ZERO,
            &style(),
            &mut Tracer::none(),
        );
        assert!(frame.placeholders.is_empty());
    }

    #[test]
    fn emit_skips_sizeless_node() {
        let node = SceneNode::new(NodeKind::Group, "no size");
        let root = SceneNode::new(NodeKind::Frame, "root").with_size(10.0, 10.0);
        let mut frame = SkeletonFrame::for_root(&root, &style());

        emit(
            &node,
            &mut frame,
            Vec2::ZERO,
            &style(),
            &mut Tracer::none(),
        );
        assert!(frame.placeholders.is_empty());
    }
}
