// Copyright 2026 the Ossify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generates a skeleton for a sample "profile card" document.
//!
//! Builds a small scene tree in memory, walks it once with the pretty-print
//! sink attached, dumps the resulting skeleton as JSON, then runs the same
//! selection through a full session against [`MemoryHost`] to show the host
//! round trip (commit, notification, close).

use ossify_backend_memory::MemoryHost;
use ossify_core::scene::{NodeKind, SceneNode};
use ossify_core::skeleton::SkeletonFrame;
use ossify_core::style::SkeletonStyle;
use ossify_core::trace::Tracer;
use ossify_core::{geometry, session, walk};
use ossify_debug::json::skeleton_to_json;
use ossify_debug::pretty::PrettyPrintSink;

/// A profile card: avatar, two text lines, an icon wrapper, a hidden debug
/// overlay, and a call-to-action button.
fn sample_card() -> SceneNode {
    SceneNode::new(NodeKind::Frame, "Profile Card")
        .with_size(320.0, 180.0)
        .at(40.0, 40.0)
        .with_children(vec![
            SceneNode::new(NodeKind::Ellipse, "Avatar")
                .with_size(48.0, 48.0)
                .at(60.0, 60.0),
            SceneNode::new(NodeKind::Text, "Display Name")
                .with_size(140.0, 18.0)
                .at(124.0, 62.0),
            SceneNode::new(NodeKind::Text, "Handle")
                .with_size(90.0, 14.0)
                .at(124.0, 86.0),
            SceneNode::new(NodeKind::Group, "Verified Icon")
                .with_size(20.0, 20.0)
                .at(272.0, 60.0)
                .with_children(vec![
                    SceneNode::new(NodeKind::Vector, "Checkmark").with_size(14.0, 14.0),
                ]),
            SceneNode::new(NodeKind::Group, "Debug Overlay")
                .hidden()
                .with_size(320.0, 180.0)
                .with_children(vec![
                    SceneNode::new(NodeKind::Rectangle, "Bounds").with_size(320.0, 180.0),
                ]),
            SceneNode::new(NodeKind::Instance, "Follow Button")
                .with_size(280.0, 40.0)
                .at(60.0, 160.0)
                .with_children(vec![
                    SceneNode::new(NodeKind::Rectangle, "BG").with_size(280.0, 40.0),
                    SceneNode::new(NodeKind::Text, "Follow").with_size(52.0, 16.0),
                ]),
        ])
}

fn main() {
    let card = sample_card();
    let style = SkeletonStyle::default();

    // -- traced walk -------------------------------------------------------
    let mut sink = PrettyPrintSink::with_writer(std::io::stdout());
    let mut tracer = Tracer::new(&mut sink);
    let mut frame = SkeletonFrame::for_root(&card, &style);
    let origin = geometry::walk_origin(card.absolute_transform);
    walk::walk(&card, &mut frame, origin, &style, &mut tracer);
    drop(tracer);

    println!("{:#}", skeleton_to_json(&frame));

    // -- full session against the in-memory host ---------------------------
    let mut host = MemoryHost::with_selection(vec![card]);
    match session::run(&mut host, &style, &mut Tracer::none()) {
        Ok(summary) => println!(
            "committed {:?} with {} placeholder(s), {} node(s) on the page",
            summary.frame_name,
            summary.placeholders,
            host.node_count(),
        ),
        Err(err) => println!("session ended early: {err}"),
    }

    for notification in host.notifications() {
        println!("notify: {notification}");
    }
}
