//! # Scene Model
//!
//! [`SceneModel`] owns the whole shape hierarchy under a shapeless root node
//! and tracks the current selection as a [`NodePath`]. The root's children
//! are the model's top-level shapes.
//!
//! Loading is all-or-nothing: a file is decoded into a fresh tree, and only a
//! successful decode replaces the existing one.

use std::fmt;
use std::path::Path;

use cgmath::Matrix4;

use super::codec::{DecodedModel, ModelCodec, MAX_DEPTH};
use super::node::SceneNode;
use super::shape::Shape;
use super::transform::identity_matrix;
use crate::config::ModellerConfig;
use crate::error::{CodecError, ParseIssue};
use crate::gfx::geometry::{Aabb, ShapeKind, TessellationLevel};
use crate::gfx::render::{DrawItem, Renderer};

/// Where [`SceneModel::add_shape`] attaches new nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPolicy {
    /// Always append to the top level.
    #[default]
    TopLevel,
    /// Append as the last child of the current selection, falling back to
    /// the top level when nothing is selected.
    ChildOfCurrent,
}

/// Child indices from the model root. Never empty for a shape node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn top_level(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Path of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// True when `self` is `ancestor` or lies below it.
    pub fn starts_with(&self, ancestor: &NodePath) -> bool {
        self.0.starts_with(&ancestor.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

/// What a load produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub shape_count: usize,
    pub issues: Vec<ParseIssue>,
}

/// Scene statistics for debugging and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneStatistics {
    pub shape_count: usize,
    pub top_level_count: usize,
    pub max_depth: usize,
    pub total_vertices: usize,
    pub total_triangles: usize,
}

#[derive(Debug, Clone)]
pub struct SceneModel {
    root: SceneNode,
    current: Option<NodePath>,
    insert_policy: InsertPolicy,
    default_level: TessellationLevel,
    codec: ModelCodec,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneModel {
    pub fn new() -> Self {
        Self::with_config(&ModellerConfig::default())
    }

    pub fn with_config(config: &ModellerConfig) -> Self {
        Self {
            root: SceneNode::group(),
            current: None,
            insert_policy: config.insert_policy,
            default_level: config.default_level,
            codec: ModelCodec::with_strict(config.strict_parsing),
        }
    }

    pub fn insert_policy(&self) -> InsertPolicy {
        self.insert_policy
    }

    pub fn default_level(&self) -> TessellationLevel {
        self.default_level
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    /// Top-level nodes, oldest first.
    pub fn nodes(&self) -> &[SceneNode] {
        self.root.children()
    }

    /// The shapeless node everything hangs from. Its group transform is the
    /// whole-model view rotation.
    pub fn root_node(&self) -> &SceneNode {
        &self.root
    }

    pub fn root_node_mut(&mut self) -> &mut SceneNode {
        &mut self.root
    }

    pub fn shape_count(&self) -> usize {
        self.root.shape_count()
    }

    /// Creates a shape at the default level and inserts it according to the
    /// insert policy. The new node becomes current.
    pub fn add_shape(&mut self, kind: impl Into<ShapeKind>) -> NodePath {
        let shape = Shape::new(kind.into(), self.default_level);
        log::info!("Adding {} at level {}", shape.shape_type(), self.default_level);
        self.add_node(SceneNode::new(shape))
    }

    /// Inserts a prepared node according to the insert policy and selects it.
    ///
    /// A child that would nest deeper than the file format allows goes to
    /// the top level instead.
    pub fn add_node(&mut self, node: SceneNode) -> NodePath {
        let parent = match self.insert_policy {
            InsertPolicy::TopLevel => None,
            InsertPolicy::ChildOfCurrent => self
                .current
                .clone()
                .filter(|path| self.root.node_at(path.indices()).is_some()),
        };
        let parent = parent.filter(|path| {
            let fits = path.depth() + node.shape_depth() <= MAX_DEPTH;
            if !fits {
                log::warn!(
                    "nesting below {} would exceed {} levels, adding at top level",
                    path,
                    MAX_DEPTH
                );
            }
            fits
        });

        if let Some(parent_path) = parent {
            if let Some(parent) = self.root.node_at_mut(parent_path.indices()) {
                let path = parent_path.child(parent.add_child(node));
                self.current = Some(path.clone());
                return path;
            }
        }

        let path = NodePath::top_level(self.root.add_child(node));
        self.current = Some(path.clone());
        path
    }

    /// Removes the most recently added top-level node with its subtree.
    ///
    /// Returns `false` when the model is empty. A selection inside the removed
    /// subtree moves to the last remaining top-level node.
    pub fn remove_last_shape(&mut self) -> bool {
        let Some(removed) = self.root.remove_last_child() else {
            log::debug!("remove on empty model ignored");
            return false;
        };

        let removed_path = NodePath::top_level(self.root.children().len());
        let removed_shapes = removed.shape_count();
        log::info!("Removed top-level node with {} shapes", removed_shapes);

        let selection_lost = self
            .current
            .as_ref()
            .map_or(false, |current| current.starts_with(&removed_path));
        if selection_lost {
            self.current = self
                .root
                .children()
                .len()
                .checked_sub(1)
                .map(NodePath::top_level);
        }
        true
    }

    /// Moves the selection to the next shape in pre-order, wrapping around.
    pub fn select_next(&mut self) -> Option<&NodePath> {
        let paths = self.root.shape_paths();
        if paths.is_empty() {
            self.current = None;
            return None;
        }

        let position = self
            .current
            .as_ref()
            .and_then(|current| paths.iter().position(|p| p.as_slice() == current.indices()));
        let next = match position {
            Some(i) => (i + 1) % paths.len(),
            None => 0,
        };

        self.current = paths.into_iter().nth(next).map(NodePath::new);
        self.current.as_ref()
    }

    /// Selects `path` if it names a shape node.
    pub fn select(&mut self, path: NodePath) -> bool {
        let is_shape = self
            .root
            .node_at(path.indices())
            .map_or(false, |node| node.shape().is_some());
        if is_shape {
            self.current = Some(path);
        }
        is_shape
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    pub fn current_path(&self) -> Option<&NodePath> {
        self.current.as_ref()
    }

    pub fn current_node(&self) -> Option<&SceneNode> {
        self.current
            .as_ref()
            .and_then(|path| self.root.node_at(path.indices()))
    }

    pub fn current_node_mut(&mut self) -> Option<&mut SceneNode> {
        let path = self.current.as_ref()?;
        self.root.node_at_mut(path.indices())
    }

    pub fn current_shape(&self) -> Option<&Shape> {
        self.current_node().and_then(SceneNode::shape)
    }

    pub fn current_shape_mut(&mut self) -> Option<&mut Shape> {
        self.current_node_mut().and_then(SceneNode::shape_mut)
    }

    /// Pre-order walk over every node with its global transform, starting at
    /// the root.
    pub fn traverse<F>(&self, visitor: &mut F)
    where
        F: FnMut(&SceneNode, &Matrix4<f32>),
    {
        self.root.traverse(visitor);
    }

    /// Hands every shape to `renderer` in pre-order.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let mut path = Vec::new();
        self.render_node(&self.root, &identity_matrix(), &mut path, renderer);
    }

    fn render_node(
        &self,
        node: &SceneNode,
        parent_global: &Matrix4<f32>,
        path: &mut Vec<usize>,
        renderer: &mut dyn Renderer,
    ) {
        let global = node.compute_global_transform(parent_global);

        if let Some(shape) = node.shape() {
            let selected = self
                .current
                .as_ref()
                .map_or(false, |current| current.indices() == path.as_slice());
            renderer.draw_shape(DrawItem {
                shape_type: shape.shape_type(),
                mesh: shape.mesh(),
                model_matrix: global,
                color: shape.color(),
                selected,
            });
        }

        for (index, child) in node.children().iter().enumerate() {
            path.push(index);
            self.render_node(child, &global, path, renderer);
            path.pop();
        }
    }

    /// World-space bounds of all shapes, or `None` for an empty model.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut bounds: Option<Aabb> = None;
        self.traverse(&mut |node, global| {
            if let Some(shape) = node.shape() {
                let shape_bounds = shape.mesh().bounds().transform(global);
                bounds = Some(match bounds {
                    Some(acc) => acc.union(&shape_bounds),
                    None => shape_bounds,
                });
            }
        });
        bounds
    }

    pub fn statistics(&self) -> SceneStatistics {
        let mut stats = SceneStatistics {
            top_level_count: self.root.children().len(),
            ..SceneStatistics::default()
        };
        for path in self.root.shape_paths() {
            stats.max_depth = stats.max_depth.max(path.len());
            if let Some(shape) = self.root.node_at(&path).and_then(SceneNode::shape) {
                stats.shape_count += 1;
                stats.total_vertices += shape.mesh().vertex_count();
                stats.total_triangles += shape.mesh().triangle_count();
            }
        }
        stats
    }

    /// Writes the hierarchy to `path`. The root's view rotation is not saved.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        self.codec.write_file(path, self.root.children())
    }

    /// Replaces the model with the contents of `path`.
    ///
    /// On error the current model is left untouched. On success the first
    /// top-level node is selected and the view rotation is reset.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, CodecError> {
        let decoded = self.codec.read_file(path)?;
        Ok(self.replace_with(decoded))
    }

    /// Like [`load_from_file`](Self::load_from_file), from in-memory text.
    pub fn load_from_str(&mut self, text: &str) -> Result<LoadReport, CodecError> {
        let decoded = self.codec.decode(text)?;
        Ok(self.replace_with(decoded))
    }

    fn replace_with(&mut self, decoded: DecodedModel) -> LoadReport {
        let shape_count = decoded.shape_count();

        let mut root = SceneNode::group();
        for node in decoded.nodes {
            root.add_child(node);
        }
        self.root = root;
        self.current = self.root.shape_paths().into_iter().next().map(NodePath::new);

        LoadReport {
            shape_count,
            issues: decoded.issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::ShapeType;
    use crate::gfx::render::DrawList;
    use crate::gfx::scene::transform::Axis;

    fn child_policy() -> SceneModel {
        SceneModel::with_config(
            &ModellerConfig::default().with_insert_policy(InsertPolicy::ChildOfCurrent),
        )
    }

    #[test]
    fn test_add_selects_new_shape() {
        let mut model = SceneModel::new();
        assert!(model.is_empty());

        let first = model.add_shape(ShapeType::Box);
        let second = model.add_shape(ShapeType::Sphere);

        assert_eq!(first, NodePath::top_level(0));
        assert_eq!(second, NodePath::top_level(1));
        assert_eq!(model.current_path(), Some(&second));
        assert_eq!(model.current_shape().map(Shape::shape_type), Some(ShapeType::Sphere));
        assert_eq!(model.shape_count(), 2);
    }

    #[test]
    fn test_child_of_current_policy_nests() {
        let mut model = child_policy();
        model.add_shape(ShapeType::Box);
        let child = model.add_shape(ShapeType::Sphere);
        let grandchild = model.add_shape(ShapeType::Cone);

        assert_eq!(child, NodePath::new(vec![0, 0]));
        assert_eq!(grandchild, NodePath::new(vec![0, 0, 0]));
        assert_eq!(model.nodes().len(), 1);

        model.clear_selection();
        assert_eq!(model.add_shape(ShapeType::Cylinder), NodePath::top_level(1));
    }

    #[test]
    fn test_child_of_current_stops_nesting_at_max_depth() {
        let mut model = child_policy();
        for _ in 0..MAX_DEPTH {
            model.add_shape(ShapeType::Box);
        }
        assert_eq!(model.current_path().map(NodePath::depth), Some(MAX_DEPTH));

        let next = model.add_shape(ShapeType::Sphere);
        assert_eq!(next, NodePath::top_level(1));
        assert_eq!(model.statistics().max_depth, MAX_DEPTH);
        assert_eq!(model.shape_count(), MAX_DEPTH + 1);
    }

    #[test]
    fn test_remove_last_on_empty_is_noop() {
        let mut model = SceneModel::new();
        assert!(!model.remove_last_shape());
        assert!(model.is_empty());
        assert!(model.current_path().is_none());
    }

    #[test]
    fn test_remove_drops_subtree_and_moves_selection() {
        let mut model = child_policy();
        model.add_shape(ShapeType::Box);
        model.clear_selection();
        model.add_shape(ShapeType::Sphere);
        model.add_shape(ShapeType::Cone);
        assert_eq!(model.current_path(), Some(&NodePath::new(vec![1, 0])));

        assert!(model.remove_last_shape());
        assert_eq!(model.shape_count(), 1);
        assert_eq!(model.current_path(), Some(&NodePath::top_level(0)));

        assert!(model.remove_last_shape());
        assert!(model.current_path().is_none());
    }

    #[test]
    fn test_remove_keeps_unrelated_selection() {
        let mut model = SceneModel::new();
        model.add_shape(ShapeType::Box);
        model.add_shape(ShapeType::Sphere);
        model.select(NodePath::top_level(0));

        assert!(model.remove_last_shape());
        assert_eq!(model.current_path(), Some(&NodePath::top_level(0)));
    }

    #[test]
    fn test_select_next_cycles_pre_order() {
        let mut model = child_policy();
        model.add_shape(ShapeType::Box);
        model.add_shape(ShapeType::Sphere);
        model.clear_selection();
        model.add_shape(ShapeType::Cone);

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(model.select_next().cloned().unwrap());
        }
        assert_eq!(
            seen,
            vec![
                NodePath::new(vec![0]),
                NodePath::new(vec![0, 0]),
                NodePath::new(vec![1]),
                NodePath::new(vec![0]),
            ]
        );
    }

    #[test]
    fn test_select_next_on_empty_model() {
        let mut model = SceneModel::new();
        assert!(model.select_next().is_none());
    }

    #[test]
    fn test_render_visits_each_shape_once_with_selection() {
        let mut model = child_policy();
        model.add_shape(ShapeType::Box);
        model.current_shape_mut().unwrap().translate(Axis::X, 2.0);
        model.add_shape(ShapeType::Sphere);

        let mut list = DrawList::new();
        model.render(&mut list);

        assert_eq!(list.len(), 2);
        let commands = list.commands();
        assert_eq!(commands[0].shape_type, ShapeType::Box);
        assert!(!commands[0].selected);
        assert!(commands[1].selected);
        // Child inherits the parent's translation.
        assert_eq!(commands[1].model_matrix.w.x, 2.0);
    }

    #[test]
    fn test_view_rotation_applies_to_everything() {
        let mut model = child_policy();
        model.add_shape(ShapeType::Cone);
        model.add_shape(ShapeType::Sphere);
        model.current_shape_mut().unwrap().translate(Axis::X, 1.0);
        model.root_node_mut().transform_mut().rotate(Axis::Y, 90.0);

        let mut list = DrawList::new();
        model.render(&mut list);
        assert_eq!(list.len(), 2);
        assert_ne!(list.commands()[0].model_matrix, identity_matrix());

        // (1,0,0) turned 90° about Y lands on (0,0,-1).
        let child = list.commands()[1].model_matrix;
        assert!(child.w.x.abs() < 1e-6);
        assert!((child.w.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_cover_transformed_shapes() {
        let mut model = SceneModel::new();
        assert!(model.bounds().is_none());

        model.add_shape(ShapeType::Box);
        model.add_shape(ShapeType::Box);
        model.current_shape_mut().unwrap().translate(Axis::X, 3.0);

        let bounds = model.bounds().unwrap();
        assert!((bounds.min.x + 0.5).abs() < 1e-5);
        assert!((bounds.max.x - 3.5).abs() < 1e-5);
    }

    #[test]
    fn test_failed_load_keeps_model() {
        let mut model = SceneModel::with_config(&ModellerConfig::default().with_strict_parsing(true));
        model.add_shape(ShapeType::Box);

        let result = model.load_from_str("NODE PYRAMID 1 0 0 0 0 0 0 1 1 1 1 1 1\nENDNODE\n");
        assert!(matches!(result, Err(CodecError::Parse(_))));
        assert_eq!(model.shape_count(), 1);
        assert_eq!(model.current_path(), Some(&NodePath::top_level(0)));
    }

    #[test]
    fn test_load_replaces_and_selects_first() {
        let mut model = SceneModel::new();
        model.add_shape(ShapeType::Box);
        model.add_shape(ShapeType::Box);
        model.root_node_mut().transform_mut().rotate(Axis::X, 30.0);

        let report = model
            .load_from_str(
                "NODE CONE 1 0 0 0 0 0 0 1 1 1 1 1 1\nCHILD\nNODE SPHERE 1 0 0 0 0 0 0 1 1 1 1 1 1\nENDNODE\nENDCHILD\nENDNODE\n",
            )
            .unwrap();

        assert_eq!(report.shape_count, 2);
        assert!(report.issues.is_empty());
        assert_eq!(model.nodes().len(), 1);
        assert_eq!(model.current_shape().map(Shape::shape_type), Some(ShapeType::Cone));
        assert!(model.root_node().transform().is_identity());
    }

    #[test]
    fn test_statistics() {
        let mut model = child_policy();
        model.add_shape(ShapeType::Sphere);
        model.add_shape(ShapeType::Cone);

        let stats = model.statistics();
        assert_eq!(stats.shape_count, 2);
        assert_eq!(stats.top_level_count, 1);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.total_triangles, 256 + 32);
    }
}
