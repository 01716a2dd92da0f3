// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder styling.
//!
//! Skeleton visuals are intentionally fixed: rounded light-gray blocks on a
//! white frame. [`SkeletonStyle::default`] carries those constants; a host
//! that wants different chrome can construct its own style and pass it to
//! the session.

/// An RGB color with components in `[0.0, 1.0]`.
///
/// Kept minimal on purpose — ossify never blends, parses, or converts
/// colors, so a full color crate would be dead weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Rgb {
    /// The placeholder gray, `#F2F2F2`.
    pub const PLACEHOLDER_GRAY: Self = Self::new(0.949, 0.949, 0.949);

    /// Plain white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a color from components.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// A fill paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// A single solid color.
    Solid(Rgb),
}

/// Visual parameters for a generated skeleton.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonStyle {
    /// Corner radius applied to every placeholder.
    pub corner_radius: f64,
    /// Fill applied to every placeholder.
    pub placeholder_fill: Paint,
    /// Background fill of the output frame.
    pub frame_fill: Paint,
    /// Horizontal gap between the source root and the output frame.
    pub gap: f64,
}

impl Default for SkeletonStyle {
    fn default() -> Self {
        Self {
            corner_radius: 6.0,
            placeholder_fill: Paint::Solid(Rgb::PLACEHOLDER_GRAY),
            frame_fill: Paint::Solid(Rgb::WHITE),
            gap: 250.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_fixed_constants() {
        let style = SkeletonStyle::default();
        assert_eq!(style.corner_radius, 6.0);
        assert_eq!(
            style.placeholder_fill,
            Paint::Solid(Rgb::new(0.949, 0.949, 0.949))
        );
        assert_eq!(style.frame_fill, Paint::Solid(Rgb::WHITE));
        assert_eq!(style.gap, 250.0);
    }
}
