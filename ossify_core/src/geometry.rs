// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute-to-local position resolution.
//!
//! The walk fixes one origin up front — the root node's absolute position —
//! and every placeholder is positioned at its source node's absolute
//! translation minus that origin. This is a pure translation: rotation and
//! skew coefficients of the transform are ignored, so rotated subtrees
//! produce axis-aligned placeholders at the translated origin.

use kurbo::{Affine, Point, Vec2};

/// The fixed origin of a walk, in document-space coordinates.
///
/// Captured once from the root's absolute transform before descent begins
/// and never updated mid-walk.
#[must_use]
pub fn walk_origin(root_transform: Affine) -> Vec2 {
    root_transform.translation()
}

/// Resolves a node's position in the output frame's local space.
///
/// Equivalent to subtracting the walk origin from the translation column of
/// the node's absolute transform. The transform is trusted to already
/// reflect absolute document position.
#[must_use]
pub fn local_position(absolute_transform: Affine, origin: Vec2) -> Point {
    (absolute_transform.translation() - origin).to_point()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_the_translation_component() {
        let transform = Affine::translate((12.5, -3.0));
        assert_eq!(walk_origin(transform), Vec2::new(12.5, -3.0));
    }

    #[test]
    fn local_position_subtracts_origin_exactly() {
        let origin = Vec2::new(10.0, 10.0);
        let transform = Affine::translate((60.0, 35.0));
        assert_eq!(local_position(transform, origin), Point::new(50.0, 25.0));
    }

    #[test]
    fn node_at_origin_maps_to_zero() {
        let origin = Vec2::new(10.0, 10.0);
        let transform = Affine::translate((10.0, 10.0));
        assert_eq!(local_position(transform, origin), Point::ZERO);
    }

    #[test]
    fn rotation_is_ignored() {
        // A rotated transform still resolves to its translation column.
        let origin = Vec2::ZERO;
        let transform = Affine::translate((7.0, 9.0)) * Affine::rotate(1.0);
        let resolved = local_position(transform, origin);
        assert!((resolved.x - 7.0).abs() < 1e-9, "got {resolved:?}");
        assert!((resolved.y - 9.0).abs() < 1e-9, "got {resolved:?}");
    }
}
