// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrace Pixel Lock: constant on-screen size under ambient zoom.
//!
//! Markers, glyphs, and other textured elements in a plot usually should not
//! grow when the user zooms in: a 10x10-pixel point marker stays 10x10 while
//! the data around it spreads out. This crate keeps such elements at a fixed
//! footprint by inverting the composed ambient scale:
//!
//! ```text
//! local_scale = target_px / (ambient_scale * intrinsic_size)
//! ```
//!
//! where `ambient_scale` is the product of scale factors along the element's
//! parent chain, resolved from the scene tree.
//!
//! [`PixelLockRegistry`] owns one [`PixelLockBinding`] per locked element.
//! Hosts call [`PixelLockRegistry::on_zoom`] with every zoom-scale change
//! notification from a plot's transform; the registry recomputes bindings
//! under the zoomed container, applies only the scales that actually
//! changed, and returns the nodes it touched so hosts know what to redraw.
//! Bindings that are not descendants of the zoomed container are silently
//! skipped: with several plots side by side, one plot's zoom must not
//! rescale another plot's markers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use terrace_pixel_lock::{PixelLockBinding, PixelLockRegistry};
//! use terrace_scene::{ContainerNode, SceneTree};
//!
//! let mut tree = SceneTree::new();
//! let zoomable = tree.insert(None, ContainerNode::default());
//! let marker = tree.insert(Some(zoomable), ContainerNode::default());
//!
//! let mut registry = PixelLockRegistry::new();
//! registry.attach(
//!     &mut tree,
//!     PixelLockBinding {
//!         node: marker,
//!         target_size: Size::new(10.0, 10.0),
//!         intrinsic_size: Size::new(100.0, 100.0),
//!     },
//! );
//!
//! // The user zooms the container to 2x; the marker compensates.
//! tree.set_scale(zoomable, Vec2::new(2.0, 2.0));
//! let changed = registry.on_zoom(&mut tree, zoomable);
//! assert_eq!(changed.as_slice(), &[marker]);
//! assert_eq!(tree.scale(marker), Some(Vec2::new(0.05, 0.05)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Size, Vec2};
use smallvec::SmallVec;
use terrace_scene::{NodeId, SceneTree};

/// One pixel-locked element: which node, how big on screen, and how big its
/// content naturally is.
///
/// The binding holds the node by id only; the scene tree stays owned by the
/// host and is borrowed per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelLockBinding {
    /// The scene node whose local scale is managed.
    pub node: NodeId,
    /// Desired on-screen footprint, in renderer pixels.
    pub target_size: Size,
    /// The element's intrinsic (texture) size, in its own local units.
    pub intrinsic_size: Size,
}

/// The set of pixel-lock bindings for a host, fanned out per zoom update.
#[derive(Clone, Debug, Default)]
pub struct PixelLockRegistry {
    bindings: Vec<PixelLockBinding>,
}

impl PixelLockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no bindings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Registers a binding and immediately rescales its node to the current
    /// ambient scale.
    ///
    /// A binding for a node that is already bound replaces the previous one.
    /// Returns `true` if the node's local scale changed right away.
    pub fn attach(&mut self, tree: &mut SceneTree, binding: PixelLockBinding) -> bool {
        self.bindings.retain(|b| b.node != binding.node);
        self.bindings.push(binding);
        rescale(tree, &binding)
    }

    /// Removes the binding for `node`, leaving the node's scale as is.
    ///
    /// Returns `false` when no such binding existed.
    pub fn detach(&mut self, node: NodeId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.node != node);
        self.bindings.len() != before
    }

    /// Drops bindings whose nodes are no longer alive in `tree`.
    pub fn prune(&mut self, tree: &SceneTree) {
        self.bindings.retain(|b| tree.is_alive(b.node));
    }

    /// Reacts to a zoom-scale change of `zoomed`: recomputes every binding
    /// under that container and applies the scales that differ.
    ///
    /// Bindings outside the zoomed container's subtree (a sibling plot's
    /// markers) are skipped; that is expected filtering, not an error.
    /// Returns the nodes whose scale actually changed, for redraw
    /// scheduling.
    pub fn on_zoom(&self, tree: &mut SceneTree, zoomed: NodeId) -> SmallVec<[NodeId; 4]> {
        let mut changed = SmallVec::new();
        for binding in &self.bindings {
            if !tree.is_ancestor(zoomed, binding.node) {
                continue;
            }
            if rescale(tree, binding) {
                changed.push(binding.node);
            }
        }
        changed
    }
}

/// Recomputes one binding's local scale; returns `true` if it was applied.
///
/// The ambient scale is read from the node's parent chain. Degenerate inputs
/// (zero intrinsic size, zero ambient scale) leave the node untouched.
fn rescale(tree: &mut SceneTree, binding: &PixelLockBinding) -> bool {
    if !tree.is_alive(binding.node) {
        return false;
    }
    let ambient = match tree.parent(binding.node) {
        Some(parent) => match tree.world_scale(parent) {
            Some(scale) => scale,
            None => return false,
        },
        None => Vec2::new(1.0, 1.0),
    };

    let next = Vec2::new(
        binding.target_size.width / (ambient.x * binding.intrinsic_size.width),
        binding.target_size.height / (ambient.y * binding.intrinsic_size.height),
    );
    if !(next.x.is_finite() && next.y.is_finite()) {
        return false;
    }

    if tree.scale(binding.node) == Some(next) {
        return false;
    }
    tree.set_scale(binding.node, next)
}
