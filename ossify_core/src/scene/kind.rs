// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of scene-node kinds.

/// What kind of document element a [`SceneNode`](super::SceneNode) is.
///
/// Container kinds may carry children; shape kinds are always leaves.
/// `Vector` straddles the line: it is traversable (icon groups are often
/// modeled as nested vectors) but is never emitted as a leaf shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A layout frame.
    Frame,
    /// A loose grouping of nodes.
    Group,
    /// A reusable component definition.
    Component,
    /// An instance of a component.
    Instance,
    /// A vector shape or vector network.
    Vector,
    /// A rectangle shape.
    Rectangle,
    /// A text run.
    Text,
    /// An ellipse shape.
    Ellipse,
}

impl NodeKind {
    /// Whether the walk is allowed to descend through nodes of this kind.
    #[inline]
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        matches!(
            self,
            Self::Frame | Self::Group | Self::Component | Self::Instance | Self::Vector
        )
    }

    /// Whether a node of this kind, met as a direct child during descent,
    /// becomes a placeholder outright.
    ///
    /// `Vector` is deliberately excluded: bare vectors are either collapsed
    /// by their parent (single-vector containers) or skipped.
    #[inline]
    #[must_use]
    pub const fn is_shape_leaf(self) -> bool {
        matches!(self, Self::Rectangle | Self::Text | Self::Ellipse)
    }
}
