//! Parent-relative transform hierarchy.
//!
//! Nodes live in a [`TransformTree`] arena and refer to their parent by [`NodeId`], so a
//! child never owns its parent and any number of children may share one. Each node keeps
//! a snapshot of its last committed pose ([`TransformTree::update`]); a node counts as
//! changed while its pose differs from that snapshot or any ancestor has changed.
//!
//! [`TransformTree::transformation`] composes `parent_world · T · R · S`. The parent's world
//! matrix is cached per node and recomputed only when the parent reports a change or the
//! node was re-parented since the last read, so the cache is refreshed as a side effect of
//! reading it.

use crate::errors::HierarchyError;
use crate::float_types::Real;
use crate::matrix::Mat4;
use crate::quaternion::Quat;
use crate::vector::Vec3;
use core::fmt;

/// Handle to a node inside one [`TransformTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its tree's arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, rotation and scale of a node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose<T> {
    pub position: Vec3<T>,
    pub rotation: Quat<T>,
    pub scale: Vec3<T>,
}

impl<T: Real> Pose<T> {
    /// Origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub const fn new(position: Vec3<T>, rotation: Quat<T>, scale: Vec3<T>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// `translation · rotation · scale`
    pub fn local_matrix(&self) -> Mat4<T> {
        let translation = self.position.translation_matrix();
        let rotation = self.rotation.rotation_matrix();
        let scale = self.scale.scale_matrix();
        translation * (rotation * scale)
    }
}

impl<T: Real> Default for Pose<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Debug)]
pub struct TransformNode<T: Real> {
    pose: Pose<T>,
    parent: Option<NodeId>,
    parent_matrix: Option<Mat4<T>>,
    committed: Option<Pose<T>>,
}

impl<T: Real> TransformNode<T> {
    fn new(pose: Pose<T>) -> Self {
        Self {
            pose,
            parent: None,
            parent_matrix: None,
            committed: None,
        }
    }

    pub const fn pose(&self) -> &Pose<T> {
        &self.pose
    }

    pub fn pose_mut(&mut self) -> &mut Pose<T> {
        &mut self.pose
    }

    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// True until the first [`TransformTree::update`], then whenever the pose differs
    /// (by exact value) from the last committed one.
    pub fn pose_changed(&self) -> bool {
        match &self.committed {
            None => true,
            Some(committed) => *committed != self.pose,
        }
    }
}

/// Arena owning every node of one hierarchy.
///
/// Methods taking a [`NodeId`] panic if the id is out of range for this tree. Ids carry no
/// tree tag, so an id issued by another tree that happens to be in range refers to whichever
/// node of this tree sits at that index.
#[derive(Clone, Debug)]
pub struct TransformTree<T: Real> {
    nodes: Vec<TransformNode<T>>,
}

impl<T: Real> Default for TransformTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> TransformTree<T> {
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a root node with the identity pose.
    pub fn insert(&mut self) -> NodeId {
        self.insert_pose(Pose::IDENTITY)
    }

    pub fn insert_pose(&mut self, pose: Pose<T>) -> NodeId {
        self.nodes.push(TransformNode::new(pose));
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&TransformNode<T>> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TransformNode<T>> {
        self.nodes.get_mut(id.0)
    }

    fn node(&self, id: NodeId) -> &TransformNode<T> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TransformNode<T> {
        &mut self.nodes[id.0]
    }

    pub fn pose(&self, id: NodeId) -> &Pose<T> {
        &self.node(id).pose
    }

    pub fn set_pose(&mut self, id: NodeId, pose: Pose<T>) {
        self.node_mut(id).pose = pose;
    }

    pub fn set_position(&mut self, id: NodeId, position: Vec3<T>) {
        self.node_mut(id).pose.position = position;
    }

    pub fn set_rotation(&mut self, id: NodeId, rotation: Quat<T>) {
        self.node_mut(id).pose.rotation = rotation;
    }

    pub fn set_scale(&mut self, id: NodeId, scale: Vec3<T>) {
        self.node_mut(id).pose.scale = scale;
    }

    /// Moves the node by `delta` in parent space.
    pub fn translate(&mut self, id: NodeId, delta: Vec3<T>) {
        let pose = &mut self.node_mut(id).pose;
        pose.position = pose.position + delta;
    }

    /// Pre-multiplies the rotation by `angle` radians about `axis`, then re-normalizes.
    pub fn rotate(&mut self, id: NodeId, axis: Vec3<T>, angle: T) {
        let pose = &mut self.node_mut(id).pose;
        pose.rotation = (Quat::from_axis_angle(axis, angle) * pose.rotation).normalize();
    }

    /// Turns the node so that its forward (+z) axis points at `point`.
    pub fn look_at(&mut self, id: NodeId, point: Vec3<T>, up: Vec3<T>) {
        let pose = &mut self.node_mut(id).pose;
        let forward = (point - pose.position).normalize();
        // rotation_look maps `forward` onto +z; the node needs the opposite direction
        pose.rotation = Quat::from_matrix(&Mat4::rotation_look(forward, up)).conjugate();
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Direct children of `id`, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(id))
            .map(|(index, _)| NodeId(index))
    }

    /// Attaches `child` under `parent`, or detaches it with `None`.
    ///
    /// # Errors
    /// [`HierarchyError::UnknownNode`] for ids outside this tree, and
    /// [`HierarchyError::Cycle`] if `parent` is `child` or one of its descendants.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<(), HierarchyError> {
        if !self.contains(child) {
            return Err(HierarchyError::UnknownNode(child));
        }

        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(HierarchyError::UnknownNode(parent));
            }

            let mut cursor = Some(parent);
            while let Some(ancestor) = cursor {
                if ancestor == child {
                    tracing::warn!(%child, %parent, "rejected parent change that would form a cycle");
                    return Err(HierarchyError::Cycle { child, parent });
                }
                cursor = self.node(ancestor).parent;
            }
        }

        tracing::debug!(%child, ?parent, "parent changed");
        let node = self.node_mut(child);
        node.parent = parent;
        node.parent_matrix = None;
        Ok(())
    }

    /// Commits the node's current pose as its snapshot.
    pub fn update(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.committed = Some(node.pose);
    }

    /// Commits every node.
    pub fn update_all(&mut self) {
        for node in &mut self.nodes {
            node.committed = Some(node.pose);
        }
    }

    /// True if this node or any ancestor has an uncommitted pose change.
    pub fn has_changed(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current);
            if node.pose_changed() {
                return true;
            }
            cursor = node.parent;
        }
        false
    }

    /// World matrix of the parent, refreshing the cached copy if the parent changed or the
    /// node was re-parented since the last read.
    ///
    /// Roots always get the identity. Each level of the chain re-walks its own ancestors in
    /// [`TransformTree::has_changed`], so a query on a node at depth `d` costs `O(d²)`.
    pub fn parent_matrix(&mut self, id: NodeId) -> Mat4<T> {
        let node = self.node(id);
        let (Some(parent), cached) = (node.parent, node.parent_matrix) else {
            return Mat4::identity();
        };

        match cached {
            Some(cached) if !self.has_changed(parent) => cached,
            _ => {
                tracing::trace!(node = %id, %parent, "refreshing cached parent matrix");
                let world = self.transformation(parent);
                self.node_mut(id).parent_matrix = Some(world);
                world
            }
        }
    }

    /// World matrix: `parent_matrix · translation · rotation · scale`.
    pub fn transformation(&mut self, id: NodeId) -> Mat4<T> {
        let parent = self.parent_matrix(id);
        parent * self.node(id).pose.local_matrix()
    }

    /// Local position carried into world space by the parent matrix.
    pub fn transformed_position(&mut self, id: NodeId) -> Vec3<T> {
        let parent = self.parent_matrix(id);
        parent.transform(self.node(id).pose.position)
    }

    /// Product of the ancestors' rotations and the node's own; parent scale and position are
    /// not taken into account.
    pub fn transformed_rotation(&self, id: NodeId) -> Quat<T> {
        let node = self.node(id);
        let parent = match node.parent {
            Some(parent) => self.transformed_rotation(parent),
            None => Quat::IDENTITY,
        };
        parent * node.pose.rotation
    }
}
