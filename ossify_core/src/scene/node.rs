// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene node itself.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Size};

use super::kind::NodeKind;

/// A node in the source design-document tree.
///
/// Nodes are plain values: hosts hand ossify a snapshot of the selected
/// subtree and the walk never mutates it. The `absolute_transform` is the
/// node's position in document-global coordinates, independent of nesting;
/// only its translation component is ever consulted.
///
/// Fields a kind may not support are `Option`s. Presence, not kind, is what
/// the capability queries test, so malformed or unusual documents (e.g. a
/// sized group, a childless frame) degrade gracefully instead of panicking.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Which kind of element this is.
    pub kind: NodeKind,
    /// Display name, as shown in the design tool's layer list.
    pub name: String,
    /// Whether the node is visible.
    pub visible: bool,
    /// Whether the node is locked against editing.
    pub locked: bool,
    /// Opacity in `[0.0, 1.0]`, on kinds that support it.
    pub opacity: Option<f64>,
    /// Width and height, on kinds that support sizing.
    pub size: Option<Size>,
    /// Absolute transform; the translation holds the document-space position.
    pub absolute_transform: Affine,
    /// Ordered children, on container kinds.
    pub children: Option<Vec<SceneNode>>,
}

impl SceneNode {
    /// Creates a visible, unlocked node with an identity transform and no
    /// optional capabilities.
    #[must_use]
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            visible: true,
            locked: false,
            opacity: None,
            size: None,
            absolute_transform: Affine::IDENTITY,
            children: None,
        }
    }

    /// Sets the node's size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Sets the node's absolute document-space position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.absolute_transform = Affine::translate((x, y));
        self
    }

    /// Sets the node's opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Attaches ordered children (marks the node as exposing a child list,
    /// even if the list is empty).
    #[must_use]
    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Marks the node invisible.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Marks the node locked.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    // -- Capability queries --

    /// Whether the node carries an opacity value.
    #[inline]
    #[must_use]
    pub const fn has_opacity(&self) -> bool {
        self.opacity.is_some()
    }

    /// Whether the node carries a size.
    #[inline]
    #[must_use]
    pub const fn has_size(&self) -> bool {
        self.size.is_some()
    }

    /// Whether the node exposes a child list.
    #[inline]
    #[must_use]
    pub const fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// The node's direct children, empty if it exposes none.
    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn new_node_has_no_capabilities() {
        let node = SceneNode::new(NodeKind::Group, "empty");
        assert!(!node.has_opacity());
        assert!(!node.has_size());
        assert!(!node.has_children());
        assert!(node.visible);
        assert!(!node.locked);
        assert_eq!(node.absolute_transform, Affine::IDENTITY);
    }

    #[test]
    fn builders_set_capabilities() {
        let node = SceneNode::new(NodeKind::Frame, "card")
            .with_size(100.0, 80.0)
            .at(10.0, 20.0)
            .with_opacity(0.5)
            .with_children(vec![SceneNode::new(NodeKind::Text, "label")]);

        assert!(node.has_size());
        assert!(node.has_opacity());
        assert!(node.has_children());
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.absolute_transform.translation(), (10.0, 20.0).into());
        assert_eq!(node.size, Some(Size::new(100.0, 80.0)));
    }

    #[test]
    fn empty_child_list_still_counts_as_children() {
        let node = SceneNode::new(NodeKind::Group, "bare").with_children(vec![]);
        assert!(node.has_children());
        assert!(node.children().is_empty());
    }
}
