// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::types::{ContainerNode, NodeFlags, NodeId};

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    state: ContainerNode,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A retained tree of container nodes with generational handles.
///
/// Nodes are stored in slots; removing a node frees its slot for reuse under
/// a bumped generation, so stale [`NodeId`]s can never alias a live node.
/// All mutation is synchronous and exclusive (`&mut self`); reads between
/// input events never observe a half-applied update.
#[derive(Clone, Debug, Default)]
pub struct SceneTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl SceneTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node under `parent`, or as a detached root when `parent` is
    /// `None`.
    ///
    /// A stale `parent` handle is treated like `None`: the node is inserted
    /// unparented rather than attached to whatever reused the slot.
    pub fn insert(&mut self, parent: Option<NodeId>, state: ContainerNode) -> NodeId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let node = Node {
            parent,
            children: SmallVec::new(),
            state,
        };

        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        };

        if let Some(parent) = parent {
            if let Some(parent_node) = self.node_mut(parent) {
                parent_node.children.push(id);
            }
        }
        id
    }

    /// Removes a node and its whole subtree.
    ///
    /// Returns `false` (and does nothing) if the handle is stale. Removal is
    /// idempotent: removing an already-removed node is a no-op.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }

        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            if let Some(parent_node) = self.node_mut(parent) {
                parent_node.children.retain(|&mut child| child != id);
            }
        }
        self.remove_subtree(id);
        true
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let children = match self.node(id) {
            Some(node) => node.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        let slot = &mut self.slots[id.idx()];
        slot.node = None;
        self.free.push(id.0);
    }

    /// Returns `true` if `id` still refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the node's parent, if it is live and has one.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the node's children, or an empty slice for a stale handle.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Returns `true` if `ancestor` is a strict ancestor of `node`.
    ///
    /// A node is not its own ancestor. Stale handles are never related.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.is_alive(ancestor) {
            return false;
        }
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Returns the node's local scale.
    #[must_use]
    pub fn scale(&self, id: NodeId) -> Option<Vec2> {
        self.node(id).map(|n| n.state.scale)
    }

    /// Sets the node's local scale. Returns `false` for a stale handle.
    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.state.scale = scale;
                true
            }
            None => false,
        }
    }

    /// Returns the node's local position.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Vec2> {
        self.node(id).map(|n| n.state.position)
    }

    /// Sets the node's local position. Returns `false` for a stale handle.
    pub fn set_position(&mut self, id: NodeId, position: Vec2) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.state.position = position;
                true
            }
            None => false,
        }
    }

    /// Returns the node's own content bounds, if it has any.
    #[must_use]
    pub fn local_content_bounds(&self, id: NodeId) -> Option<Rect> {
        self.node(id).and_then(|n| n.state.local_bounds)
    }

    /// Sets the node's own content bounds. Returns `false` for a stale
    /// handle.
    pub fn set_local_content_bounds(&mut self, id: NodeId, bounds: Option<Rect>) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.state.local_bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Returns the node's flags.
    #[must_use]
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node(id).map(|n| n.state.flags)
    }

    /// Sets the node's flags. Returns `false` for a stale handle.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.state.flags = flags;
                true
            }
            None => false,
        }
    }

    /// Returns the node's local transform (scale, then translate).
    #[must_use]
    pub fn local_transform(&self, id: NodeId) -> Option<Affine> {
        self.node(id).map(|n| {
            Affine::translate(n.state.position)
                * Affine::scale_non_uniform(n.state.scale.x, n.state.scale.y)
        })
    }

    /// Returns the node's resolved world transform: the composition of its
    /// ancestor chain's local transforms, root first, own transform last.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Option<Affine> {
        let mut transform = self.local_transform(id)?;
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            // Ancestors of a live node are live by construction.
            if let Some(local) = self.local_transform(ancestor) {
                transform = local * transform;
            }
            current = self.parent(ancestor);
        }
        Some(transform)
    }

    /// Returns the product of scale factors along the node's chain, own
    /// scale included.
    ///
    /// For the scale-then-translate transforms this tree holds, this equals
    /// the scale part of [`Self::world_transform`]; pixel-locked elements
    /// read it off their parent to invert the ambient zoom.
    #[must_use]
    pub fn world_scale(&self, id: NodeId) -> Option<Vec2> {
        let mut scale = self.scale(id)?;
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if let Some(s) = self.scale(ancestor) {
                scale = Vec2::new(scale.x * s.x, scale.y * s.y);
            }
            current = self.parent(ancestor);
        }
        Some(scale)
    }

    /// Converts a world-space point into the node's local space.
    #[must_use]
    pub fn to_local(&self, id: NodeId, pt: Point) -> Option<Point> {
        Some(self.world_transform(id)?.inverse() * pt)
    }

    /// Converts a point in the node's local space into world space.
    ///
    /// Exact inverse of [`Self::to_local`] up to floating-point rounding.
    #[must_use]
    pub fn to_global(&self, id: NodeId, pt: Point) -> Option<Point> {
        Some(self.world_transform(id)? * pt)
    }

    /// Returns the node's bounding box in its own local coordinates,
    /// visible descendants included.
    ///
    /// Children's boxes are mapped through their local transforms and
    /// unioned with the node's own content bounds. Returns `None` when
    /// neither the node nor any visible descendant has content.
    #[must_use]
    pub fn local_bounds(&self, id: NodeId) -> Option<Rect> {
        let node = self.node(id)?;
        let mut bounds = node.state.local_bounds;
        for &child in &node.children {
            let visible = self
                .flags(child)
                .is_some_and(|f| f.contains(NodeFlags::VISIBLE));
            if !visible {
                continue;
            }
            if let Some(child_bounds) = self.local_bounds(child) {
                // Stale children cannot appear in a live child list.
                let mapped = self
                    .local_transform(child)
                    .map(|t| t.transform_rect_bbox(child_bounds));
                if let Some(mapped) = mapped {
                    bounds = Some(match bounds {
                        Some(b) => b.union(mapped),
                        None => mapped,
                    });
                }
            }
        }
        bounds
    }

    /// Hit-tests a world-space point against the node.
    ///
    /// Returns `true` when the node is live, pickable, and the point falls
    /// within its local bounding box (descendants included).
    #[must_use]
    pub fn hit_test_point(&self, id: NodeId, pt: Point) -> bool {
        let pickable = self
            .flags(id)
            .is_some_and(|f| f.contains(NodeFlags::PICKABLE));
        if !pickable {
            return false;
        }
        match (self.local_bounds(id), self.to_local(id, pt)) {
            (Some(bounds), Some(local)) => bounds.contains(local),
            _ => false,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_mut()
    }
}
