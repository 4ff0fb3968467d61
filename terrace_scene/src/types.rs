// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene tree: node identifiers, flags, and local state.

use kurbo::{Rect, Vec2};

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused. It consists of a slot
/// index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that
///   slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `NodeId`.
///
/// Use [`SceneTree::is_alive`](crate::SceneTree::is_alive) to check whether a
/// `NodeId` still refers to a live node. Stale `NodeId`s never alias a
/// different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (participates in bounds queries).
        const VISIBLE  = 0b0000_0001;
        /// Node is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Local state for a container node.
///
/// A node's local transform is scale-then-translate: a local point `p` maps
/// to `p * scale + position` in the parent's space.
#[derive(Clone, Copy, Debug)]
pub struct ContainerNode {
    /// Local scale relative to the parent, component-wise.
    pub scale: Vec2,
    /// Local translation relative to the parent.
    pub position: Vec2,
    /// Optional content extents in the node's own local space.
    ///
    /// Containers that only group children leave this `None`; their bounds
    /// are derived from descendants.
    pub local_bounds: Option<Rect>,
    /// Visibility and picking flags.
    pub flags: NodeFlags,
}

impl Default for ContainerNode {
    fn default() -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
            position: Vec2::ZERO,
            local_bounds: None,
            flags: NodeFlags::default(),
        }
    }
}
