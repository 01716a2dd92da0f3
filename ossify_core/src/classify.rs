// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node classification.
//!
//! Pure predicates over a [`SceneNode`], plus [`classify`] which folds them
//! into a single traversal [`Decision`] in a fixed tie-break order:
//!
//! 1. hidden check (always short-circuits — a hidden button is pruned, not
//!    emitted),
//! 2. button-name check,
//! 3. single-vector-container check,
//! 4. default descent, if the node exposes children and is of a traversable
//!    kind,
//! 5. otherwise skip.
//!
//! No predicate has side effects; the walker owns all mutation.

use crate::scene::{NodeKind, SceneNode};

/// What the walk does with a visited node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Invisible, locked, or fully transparent: no placeholder, no descent,
    /// the whole subtree is dropped.
    Prune,
    /// Named like a button: one placeholder for the node itself, descent
    /// stops regardless of other properties.
    Button,
    /// Wraps exactly one direct vector child: one placeholder covering the
    /// node (icon plus any sibling decoration), descent stops.
    IconContainer,
    /// Container with children: visit each direct child in document order.
    Descend,
    /// Nothing to do for this node itself.
    Skip,
}

impl Decision {
    /// Whether this decision emits a placeholder for the node and stops.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Button | Self::IconContainer)
    }
}

/// Whether the walk may recurse into (or through) nodes of this kind.
#[inline]
#[must_use]
pub fn is_traversable(node: &SceneNode) -> bool {
    node.kind.is_traversable()
}

/// Whether the node contributes nothing visually: invisible, locked, or
/// carrying an opacity of exactly zero.
///
/// Near-zero opacities still count as visible; only an exact `0.0` prunes.
#[must_use]
pub fn is_effectively_hidden(node: &SceneNode) -> bool {
    !node.visible || node.locked || node.opacity == Some(0.0)
}

/// Whether the node's name contains `"button"`, case-insensitively.
///
/// Buttons read as one visual unit while loading, so they collapse into a
/// single block no matter what they contain.
#[must_use]
pub fn is_button_like(node: &SceneNode) -> bool {
    node.name.to_lowercase().contains("button")
}

/// Whether the node exposes children and exactly one direct child is of kind
/// [`Vector`](NodeKind::Vector).
///
/// Only *direct* children are counted, and only the vector-kind ones;
/// siblings of other kinds are irrelevant to the count. A vector nested one
/// level deeper does not match — shallow icon wrappers collapse, deeper
/// structure is walked normally.
#[must_use]
pub fn is_single_vector_container(node: &SceneNode) -> bool {
    match &node.children {
        Some(children) => {
            children
                .iter()
                .filter(|child| child.kind == NodeKind::Vector)
                .count()
                == 1
        }
        None => false,
    }
}

/// Classifies a node, applying the predicates in tie-break order.
#[must_use]
pub fn classify(node: &SceneNode) -> Decision {
    if is_effectively_hidden(node) {
        Decision::Prune
    } else if is_button_like(node) {
        Decision::Button
    } else if is_single_vector_container(node) {
        Decision::IconContainer
    } else if node.has_children() && is_traversable(node) {
        Decision::Descend
    } else {
        Decision::Skip
    }
}
