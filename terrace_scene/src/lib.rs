// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrace Scene: a minimal retained container tree for 2D plots.
//!
//! This crate is the concrete form of the scene-graph contract the rest of
//! Terrace programs against. It represents a hierarchy of container nodes,
//! each with an independent scale and position, and answers the geometric
//! questions the interaction core needs:
//!
//! - Creating containers and adding/removing children.
//! - Setting a node's scale and position independently.
//! - Converting a point between a node's local space and world space.
//! - Computing a node's bounding box in local coordinates, descendants
//!   included.
//! - Hit testing a world-space point against a node.
//! - Ancestry queries, used to scope zoom fan-out to one plot's subtree.
//!
//! It is **not** a renderer or a layout engine: nodes carry no draw content
//! beyond an optional local bounds rect, and nothing here schedules painting.
//! Transforms are scale-then-translate only; rotation is intentionally left
//! out, matching what a plot's pan/zoom stack can produce.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use terrace_scene::{ContainerNode, SceneTree};
//!
//! let mut tree = SceneTree::new();
//! let stage = tree.insert(None, ContainerNode::default());
//! let plot = tree.insert(
//!     Some(stage),
//!     ContainerNode {
//!         scale: Vec2::new(2.0, 2.0),
//!         position: Vec2::new(10.0, 10.0),
//!         local_bounds: Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
//!         ..ContainerNode::default()
//!     },
//! );
//!
//! // A world-space point maps into the plot's local space and back.
//! let world = Point::new(30.0, 50.0);
//! let local = tree.to_local(plot, world).unwrap();
//! let back = tree.to_global(plot, local).unwrap();
//! assert!((back - world).hypot() < 1e-9);
//! ```
//!
//! Float inputs are assumed to be finite, and scale components non-zero;
//! the pan/zoom operations feeding this tree maintain both.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::SceneTree;
pub use types::{ContainerNode, NodeFlags, NodeId};
