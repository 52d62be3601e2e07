//! # Scene Graph Nodes
//!
//! A [`SceneNode`] owns an optional [`Shape`] and an ordered list of child
//! nodes. Children are owned by value, so a node can only ever be attached to
//! one parent and the graph is a tree by construction.
//!
//! A node's local matrix is its group transform followed by its shape's model
//! matrix. Children inherit the full local matrix, so moving a parent shape
//! carries its children with it.

use cgmath::Matrix4;

use super::shape::Shape;
use super::transform::{identity_matrix, Transform};

#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    shape: Option<Shape>,
    /// Group transform, applied before the shape's own transform
    transform: Transform,
    children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape: Some(shape),
            transform: Transform::identity(),
            children: Vec::new(),
        }
    }

    /// A node without a shape; only groups its children.
    pub fn group() -> Self {
        Self::default()
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn shape_mut(&mut self) -> Option<&mut Shape> {
        self.shape.as_mut()
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    /// Appends `child`, taking ownership. Returns its index among the children.
    pub fn add_child(&mut self, child: SceneNode) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Detaches and returns the most recently added child.
    pub fn remove_last_child(&mut self) -> Option<SceneNode> {
        self.children.pop()
    }

    pub(crate) fn take_children(&mut self) -> Vec<SceneNode> {
        std::mem::take(&mut self.children)
    }

    /// Group transform × shape model matrix.
    pub fn local_matrix(&self) -> Matrix4<f32> {
        match &self.shape {
            Some(shape) => self.transform.matrix() * shape.model_matrix(),
            None => self.transform.matrix(),
        }
    }

    /// `parent_global × local`.
    pub fn compute_global_transform(&self, parent_global: &Matrix4<f32>) -> Matrix4<f32> {
        parent_global * self.local_matrix()
    }

    /// Pre-order walk from this node with an identity parent transform.
    pub fn traverse<F>(&self, visitor: &mut F)
    where
        F: FnMut(&SceneNode, &Matrix4<f32>),
    {
        self.traverse_from(&identity_matrix(), visitor);
    }

    /// Pre-order walk: visits this node with its global transform, then each
    /// child in order with that transform as parent.
    pub fn traverse_from<F>(&self, parent_global: &Matrix4<f32>, visitor: &mut F)
    where
        F: FnMut(&SceneNode, &Matrix4<f32>),
    {
        let global = self.compute_global_transform(parent_global);
        visitor(self, &global);

        for child in &self.children {
            child.traverse_from(&global, visitor);
        }
    }

    /// Pre-order mutable walk for batch edits.
    pub fn visit_mut<F>(&mut self, visitor: &mut F)
    where
        F: FnMut(&mut SceneNode),
    {
        visitor(self);
        for child in &mut self.children {
            child.visit_mut(visitor);
        }
    }

    /// Follows child indices from this node.
    pub fn node_at(&self, path: &[usize]) -> Option<&SceneNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut SceneNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }

    /// Number of shapes in this subtree, this node included.
    pub fn shape_count(&self) -> usize {
        let own = usize::from(self.shape.is_some());
        own + self.children.iter().map(SceneNode::shape_count).sum::<usize>()
    }

    /// Longest run of nested shapes in this subtree. Shapeless nodes do not
    /// count since they are flattened away when written.
    pub fn shape_depth(&self) -> usize {
        let own = usize::from(self.shape.is_some());
        own + self
            .children
            .iter()
            .map(SceneNode::shape_depth)
            .max()
            .unwrap_or(0)
    }

    /// Paths (relative to this node) of every shape-carrying node, in pre-order.
    pub fn shape_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let mut prefix = Vec::new();
        self.collect_shape_paths(&mut prefix, &mut paths);
        paths
    }

    fn collect_shape_paths(&self, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if self.shape.is_some() {
            out.push(prefix.clone());
        }
        for (index, child) in self.children.iter().enumerate() {
            prefix.push(index);
            child.collect_shape_paths(prefix, out);
            prefix.pop();
        }
    }
}
