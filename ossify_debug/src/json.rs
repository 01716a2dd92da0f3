// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of generated skeletons.
//!
//! The output mirrors the committed document structure — one frame object
//! with an ordered `placeholders` array — and is stable enough to diff or
//! snapshot in tests.

use ossify_core::skeleton::{Placeholder, SkeletonFrame};
use ossify_core::style::Paint;
use serde_json::{Value, json};

fn paint_to_json(paint: Paint) -> Value {
    match paint {
        Paint::Solid(rgb) => json!({
            "type": "solid",
            "color": { "r": rgb.r, "g": rgb.g, "b": rgb.b },
        }),
    }
}

fn placeholder_to_json(p: &Placeholder) -> Value {
    json!({
        "x": p.position.x,
        "y": p.position.y,
        "width": p.size.width,
        "height": p.size.height,
        "cornerRadius": p.corner_radius,
        "fill": paint_to_json(p.fill),
    })
}

/// Serializes a skeleton frame and its placeholders.
#[must_use]
pub fn skeleton_to_json(frame: &SkeletonFrame) -> Value {
    json!({
        "name": frame.name,
        "x": frame.position.x,
        "y": frame.position.y,
        "width": frame.size.width,
        "height": frame.size.height,
        "fill": paint_to_json(frame.fill),
        "placeholders": frame.placeholders.iter().map(placeholder_to_json).collect::<Vec<_>>(),
    })
}
