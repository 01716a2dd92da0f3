// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive tree walker.
//!
//! Depth-first, pre-order, single pass. Each visited node lands in exactly
//! one of four states:
//!
//! - **pruned** — effectively hidden; nothing emitted, subtree dropped.
//! - **terminal-emitted** — button-named or single-vector container; one
//!   placeholder for the node itself, no descent.
//! - **recursed** — traversable container; each direct child is either
//!   walked (traversable kinds) or emitted directly (rectangle, text,
//!   ellipse). Any other leaf kind is skipped.
//! - **skipped** — nothing applies; no effect.
//!
//! Every placeholder is appended to the single output frame, so the result
//! is flat: nesting in the source survives only through positions, not
//! through structure. Termination follows from the tree being finite and
//! every recursive call strictly descending to a child.

use kurbo::Vec2;

use crate::classify::{self, Decision};
use crate::scene::SceneNode;
use crate::skeleton::{self, SkeletonFrame};
use crate::style::SkeletonStyle;
use crate::trace::{Tracer, VisitEvent};

/// Walks the tree rooted at `node`, emitting placeholders into `frame`.
///
/// `origin` is the fixed walk origin (the root's absolute position),
/// captured once before the first call and passed unchanged through every
/// level of recursion.
pub fn walk(
    node: &SceneNode,
    frame: &mut SkeletonFrame,
    origin: Vec2,
    style: &SkeletonStyle,
    tracer: &mut Tracer<'_>,
) {
    walk_at(node, frame, origin, style, tracer, 0);
}

fn walk_at(
    node: &SceneNode,
    frame: &mut SkeletonFrame,
    origin: Vec2,
    style: &SkeletonStyle,
    tracer: &mut Tracer<'_>,
    depth: usize,
) {
    let decision = classify::classify(node);
    tracer.visit(&VisitEvent {
        name: &node.name,
        kind: node.kind,
        depth,
        decision,
    });

    match decision {
        Decision::Prune | Decision::Skip => {}
        Decision::Button | Decision::IconContainer => {
            skeleton::emit(node, frame, origin, style, tracer);
        }
        Decision::Descend => {
            for child in node.children() {
                if classify::is_traversable(child) {
                    walk_at(child, frame, origin, style, tracer, depth + 1);
                } else if child.kind.is_shape_leaf() {
                    skeleton::emit(child, frame, origin, style, tracer);
                }
                // Other leaf kinds contribute nothing.
            }
        }
    }
}
