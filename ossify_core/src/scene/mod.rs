// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene-node data model.
//!
//! A *scene node* is one element of the source design document: a frame,
//! group, component, instance, or shape. The tree pre-exists and outlives any
//! skeleton generation pass; ossify only ever reads it.
//!
//! Node capabilities follow the duck-typed narrowing of design-tool plugin
//! APIs rather than a type hierarchy: [`NodeKind`] is a closed sum type, and
//! the fields a kind may not carry (`opacity`, `size`, `children`) are
//! [`Option`]s with explicit presence queries
//! ([`has_opacity`](SceneNode::has_opacity),
//! [`has_size`](SceneNode::has_size),
//! [`has_children`](SceneNode::has_children)). Classification, not kind
//! alone, decides traversal — a container holding exactly one vector child
//! still satisfies leaf-style predicates.

mod kind;
mod node;

pub use kind::NodeKind;
pub use node::SceneNode;
