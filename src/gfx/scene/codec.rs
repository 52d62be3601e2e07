//! # Hierarchy File Format
//!
//! Scene trees are stored as line-oriented text:
//!
//! ```text
//! # Shape Modeller Hierarchy v1
//! NODE BOX 2 0 0 0 0 0 0 1 1 1 1 1 1
//! CHILD
//!   NODE SPHERE 1 0 1.5 0 0 0 0 1 1 1 1 0 0
//!   ENDNODE
//! ENDCHILD
//! ENDNODE
//! ```
//!
//! Each `NODE` line carries the shape type, tessellation level, translation,
//! rotation (degrees), scale and RGB color. `CHILD` and `ENDCHILD` bracket a
//! node's children. Indentation is cosmetic; only line order matters.
//!
//! Reading is lenient by default: malformed lines are reported as
//! [`ParseIssue`]s and skipped while the rest of the file still loads.
//! [`ModelCodec::strict`] turns the first issue into a hard error.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use cgmath::Vector3;

use super::node::SceneNode;
use super::shape::{Rgb, Shape};
use super::transform::Transform;
use crate::error::{CodecError, ParseIssue, ParseIssueKind};
use crate::gfx::geometry::{ShapeType, TessellationLevel};

pub const HEADER: &str = "# Shape Modeller Hierarchy v1";
pub const FORMAT_VERSION: u32 = 1;

/// Nodes nested deeper than this are skipped with a diagnostic on read and
/// refused on write.
pub const MAX_DEPTH: usize = 256;

/// Fields following the `NODE` keyword.
const NODE_FIELDS: usize = 14;

const NUMERIC_FIELDS: [&str; 12] = [
    "tx", "ty", "tz", "rx", "ry", "rz", "sx", "sy", "sz", "r", "g", "b",
];

/// Result of a successful decode.
#[derive(Debug, Default)]
pub struct DecodedModel {
    /// Top-level nodes in file order.
    pub nodes: Vec<SceneNode>,
    /// Recoverable problems, in line order.
    pub issues: Vec<ParseIssue>,
}

impl DecodedModel {
    pub fn shape_count(&self) -> usize {
        self.nodes.iter().map(SceneNode::shape_count).sum()
    }
}

/// Reads and writes the hierarchy text format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelCodec {
    strict: bool,
}

impl ModelCodec {
    /// Lenient codec: bad lines become diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec that fails on the first diagnostic.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Serializes `nodes` (the top level of a model) to text.
    ///
    /// Shapeless nodes are not representable; their children are written in
    /// their place.
    pub fn encode(&self, nodes: &[SceneNode]) -> String {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');
        for node in nodes {
            encode_node(&mut out, node, 0);
        }
        out
    }

    /// Parses hierarchy text.
    pub fn decode(&self, input: &str) -> Result<DecodedModel, CodecError> {
        let mut parser = Parser::default();

        for (index, raw) in input.lines().enumerate() {
            parser.line(index + 1, raw.trim());
            if self.strict {
                if let Some(issue) = parser.issues.first() {
                    return Err(CodecError::Parse(issue.clone()));
                }
            }
        }

        let decoded = parser.finish();
        if self.strict {
            if let Some(issue) = decoded.issues.first() {
                return Err(CodecError::Parse(issue.clone()));
            }
        }

        for issue in &decoded.issues {
            log::warn!("{}", issue);
        }
        Ok(decoded)
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<DecodedModel, CodecError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CodecError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let decoded = self.decode(&text)?;
        log::info!(
            "Loaded {} shapes from {} ({} issues)",
            decoded.shape_count(),
            path.display(),
            decoded.issues.len()
        );
        Ok(decoded)
    }

    /// Fails when `nodes` nest more than [`MAX_DEPTH`] shapes, since the
    /// reader would drop the excess.
    pub fn check_depth(&self, nodes: &[SceneNode]) -> Result<(), CodecError> {
        let depth = nodes.iter().map(SceneNode::shape_depth).max().unwrap_or(0);
        if depth > MAX_DEPTH {
            return Err(CodecError::TooDeep {
                depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }

    /// Writes to a sibling temp file, then renames it over `path`, so an
    /// interrupted save leaves the previous file intact. Trees deeper than
    /// [`MAX_DEPTH`] are refused before anything is written.
    pub fn write_file(&self, path: impl AsRef<Path>, nodes: &[SceneNode]) -> Result<(), CodecError> {
        let path = path.as_ref();
        self.check_depth(nodes)?;
        let text = self.encode(nodes);
        let tmp = temp_sibling(path);

        fs::write(&tmp, text).map_err(|source| CodecError::Write {
            path: tmp.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(CodecError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        log::info!("Saved model to {}", path.display());
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn encode_node(out: &mut String, node: &SceneNode, depth: usize) {
    let Some(shape) = node.shape() else {
        for child in node.children() {
            encode_node(out, child, depth);
        }
        return;
    };

    if !node.transform().is_identity() {
        log::debug!("group transform of a {} node is not persisted", shape.shape_type());
    }

    let indent = "  ".repeat(depth);
    let transform = shape.transform();
    let t = transform.translation();
    let r = transform.rotation();
    let s = transform.scale_factors();
    let c = shape.color();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{indent}NODE {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
        shape.shape_type().token(),
        shape.level(),
        t.x,
        t.y,
        t.z,
        r.x,
        r.y,
        r.z,
        s.x,
        s.y,
        s.z,
        c[0],
        c[1],
        c[2]
    );

    if !node.children().is_empty() {
        let _ = writeln!(out, "{indent}CHILD");
        for child in node.children() {
            encode_node(out, child, depth + 1);
        }
        let _ = writeln!(out, "{indent}ENDCHILD");
    }
    let _ = writeln!(out, "{indent}ENDNODE");
}

/// An open `NODE` on the parser stack.
struct Frame {
    node: SceneNode,
    /// Placeholder for a rejected line; its children are hoisted on close
    skipped: bool,
    child_block_open: bool,
    line: usize,
}

#[derive(Default)]
struct Parser {
    stack: Vec<Frame>,
    nodes: Vec<SceneNode>,
    issues: Vec<ParseIssue>,
    seen_content: bool,
}

impl Parser {
    fn line(&mut self, line: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(comment) = text.strip_prefix('#') {
            if !self.seen_content {
                self.check_header(line, comment);
            }
            self.seen_content = true;
            return;
        }
        self.seen_content = true;

        let mut tokens = text.split_whitespace();
        let Some(directive) = tokens.next() else {
            return;
        };

        match directive {
            "NODE" => {
                let fields: Vec<&str> = tokens.collect();
                self.open_node(line, &fields);
            }
            "CHILD" => {
                if let Some(top) = self.stack.last_mut() {
                    top.child_block_open = true;
                }
            }
            "ENDCHILD" => self.end_child(line),
            "ENDNODE" => match self.stack.pop() {
                Some(frame) => self.close(frame),
                None => self.issue(line, ParseIssueKind::UnmatchedEnd("ENDNODE")),
            },
            other => self.issue(line, ParseIssueKind::UnknownDirective(other.to_string())),
        }
    }

    fn check_header(&mut self, line: usize, comment: &str) {
        let version = comment
            .split_whitespace()
            .last()
            .and_then(|token| token.strip_prefix('v'))
            .and_then(|digits| digits.parse::<u32>().ok());

        if let Some(found) = version {
            if found > FORMAT_VERSION {
                self.issue(
                    line,
                    ParseIssueKind::UnsupportedVersion {
                        found,
                        supported: FORMAT_VERSION,
                    },
                );
            }
        }
    }

    fn open_node(&mut self, line: usize, fields: &[&str]) {
        if self.stack.len() >= MAX_DEPTH {
            self.issue(line, ParseIssueKind::TooDeep(MAX_DEPTH));
            self.push(line, SceneNode::group(), true);
            return;
        }

        match parse_node_fields(fields) {
            Ok(shape) => self.push(line, SceneNode::new(shape), false),
            Err(kind) => {
                self.issue(line, kind);
                self.push(line, SceneNode::group(), true);
            }
        }
    }

    fn push(&mut self, line: usize, node: SceneNode, skipped: bool) {
        self.stack.push(Frame {
            node,
            skipped,
            child_block_open: false,
            line,
        });
    }

    /// Closes the child block of the node on top. If that node never opened
    /// one, the node itself was left open inside its parent's block; close it
    /// and then the parent's block.
    fn end_child(&mut self, line: usize) {
        let Some(top) = self.stack.last_mut() else {
            self.issue(line, ParseIssueKind::UnmatchedEnd("ENDCHILD"));
            return;
        };

        if top.child_block_open {
            top.child_block_open = false;
            return;
        }

        if let Some(frame) = self.stack.pop() {
            self.issue(line, ParseIssueKind::UnclosedNode { opened_at: frame.line });
            self.close(frame);
        }
        if let Some(parent) = self.stack.last_mut() {
            parent.child_block_open = false;
        }
    }

    /// Attaches a finished node to the node below it, or to the top level.
    fn close(&mut self, frame: Frame) {
        let Frame { mut node, skipped, .. } = frame;
        if skipped {
            for child in node.take_children() {
                self.attach(child);
            }
        } else {
            self.attach(node);
        }
    }

    fn attach(&mut self, node: SceneNode) {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.node.add_child(node);
            }
            None => self.nodes.push(node),
        }
    }

    fn issue(&mut self, line: usize, kind: ParseIssueKind) {
        self.issues.push(ParseIssue { line, kind });
    }

    fn finish(mut self) -> DecodedModel {
        while let Some(frame) = self.stack.pop() {
            let opened_at = frame.line;
            self.close(frame);
            self.issue(opened_at, ParseIssueKind::UnclosedNode { opened_at });
        }
        self.issues.sort_by_key(|issue| issue.line);

        DecodedModel {
            nodes: self.nodes,
            issues: self.issues,
        }
    }
}

fn parse_node_fields(fields: &[&str]) -> Result<Shape, ParseIssueKind> {
    if fields.len() != NODE_FIELDS {
        return Err(ParseIssueKind::FieldCount {
            expected: NODE_FIELDS,
            found: fields.len(),
        });
    }

    let shape_type: ShapeType = fields[0]
        .parse()
        .map_err(|_| ParseIssueKind::UnknownShapeType(fields[0].to_string()))?;

    let level = parse_level(fields[1]).ok_or_else(|| ParseIssueKind::InvalidNumber {
        field: "level",
        value: fields[1].to_string(),
    })?;

    let mut values = [0.0f32; 12];
    for ((slot, name), token) in values.iter_mut().zip(NUMERIC_FIELDS).zip(&fields[2..]) {
        *slot = token
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseIssueKind::InvalidNumber {
                field: name,
                value: token.to_string(),
            })?;
    }

    let [tx, ty, tz, rx, ry, rz, sx, sy, sz, r, g, b] = values;
    let transform = Transform::from_parts(
        Vector3::new(tx, ty, tz),
        Vector3::new(rx, ry, rz),
        Vector3::new(sx, sy, sz),
    );
    let color: Rgb = [r, g, b];

    Ok(Shape::from_parts(
        shape_type.default_kind(),
        TessellationLevel::new(level),
        transform,
        color,
    ))
}

/// Any whole number is accepted, including `-1` or `2.0`, and saturated into
/// `u32` so [`TessellationLevel::new`] can clamp it.
fn parse_level(token: &str) -> Option<u32> {
    let whole = match token.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            let value = token.parse::<f64>().ok().filter(|v| v.is_finite())?;
            if value.fract() != 0.0 {
                return None;
            }
            value.clamp(i64::MIN as f64, i64::MAX as f64) as i64
        }
    };
    Some(whole.clamp(0, i64::from(u32::MAX)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::transform::Axis;

    fn shape(ty: ShapeType, level: u32) -> Shape {
        Shape::of_type(ty, TessellationLevel::new(level))
    }

    fn types(nodes: &[SceneNode]) -> Vec<ShapeType> {
        nodes
            .iter()
            .filter_map(|n| n.shape().map(Shape::shape_type))
            .collect()
    }

    fn kinds(issues: &[ParseIssue]) -> Vec<&ParseIssueKind> {
        issues.iter().map(|i| &i.kind).collect()
    }

    #[test]
    fn test_encode_layout() {
        let mut root = SceneNode::new(shape(ShapeType::Box, 2));
        let mut child = shape(ShapeType::Sphere, 1);
        child.translate(Axis::Y, 1.5);
        child.set_color([1.0, 0.0, 0.0]);
        root.add_child(SceneNode::new(child));

        let text = ModelCodec::new().encode(&[root]);
        let expected = "\
# Shape Modeller Hierarchy v1
NODE BOX 2 0 0 0 0 0 0 1 1 1 1 1 1
CHILD
  NODE SPHERE 1 0 1.5 0 0 0 0 1 1 1 1 0 0
  ENDNODE
ENDCHILD
ENDNODE
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_round_trip_preserves_structure_and_values() {
        let mut b = shape(ShapeType::Box, 2);
        b.rotate(Axis::Y, 37.5);
        b.scale(Axis::X, 1.1);
        let mut root = SceneNode::new(b);

        let mut grandchild = SceneNode::new(shape(ShapeType::Cylinder, 4));
        grandchild.add_child(SceneNode::new(shape(ShapeType::Sphere, 1)));
        let mut child = SceneNode::new(shape(ShapeType::Sphere, 1));
        child.add_child(grandchild);
        root.add_child(child);
        root.add_child(SceneNode::new(shape(ShapeType::Cone, 3)));

        let second = SceneNode::new(shape(ShapeType::Cone, 2));

        let codec = ModelCodec::new();
        let text = codec.encode(&[root.clone(), second]);
        let decoded = codec.decode(&text).unwrap();

        assert!(decoded.issues.is_empty());
        assert_eq!(types(&decoded.nodes), vec![ShapeType::Box, ShapeType::Cone]);

        let loaded = &decoded.nodes[0];
        assert_eq!(types(loaded.children()), vec![ShapeType::Sphere, ShapeType::Cone]);
        assert_eq!(
            types(loaded.children()[0].children()),
            vec![ShapeType::Cylinder]
        );
        assert_eq!(loaded.children()[0].children()[0].children().len(), 1);

        let original = root.shape().unwrap();
        let restored = loaded.shape().unwrap();
        assert_eq!(restored.transform(), original.transform());
        assert_eq!(restored.level(), original.level());
        assert_eq!(restored.color(), original.color());
        assert_eq!(restored.mesh(), original.mesh());

        // Encoding is stable once loaded.
        assert_eq!(codec.encode(&decoded.nodes), text);
    }

    #[test]
    fn test_child_markers_are_optional() {
        let text = "\
NODE BOX 1 0 0 0 0 0 0 1 1 1 1 1 1
NODE CONE 1 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
ENDNODE
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        assert!(decoded.issues.is_empty());
        assert_eq!(decoded.nodes.len(), 1);
        assert_eq!(types(decoded.nodes[0].children()), vec![ShapeType::Cone]);
    }

    #[test]
    fn test_stray_end_is_ignored() {
        let text = "\
ENDNODE
NODE SPHERE 1 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
ENDCHILD
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        assert_eq!(types(&decoded.nodes), vec![ShapeType::Sphere]);
        assert_eq!(
            kinds(&decoded.issues),
            vec![
                &ParseIssueKind::UnmatchedEnd("ENDNODE"),
                &ParseIssueKind::UnmatchedEnd("ENDCHILD"),
            ]
        );
        assert_eq!(decoded.issues[0].line, 1);
        assert_eq!(decoded.issues[1].line, 4);
    }

    #[test]
    fn test_lone_end_marker_yields_empty_model() {
        let decoded = ModelCodec::new().decode("ENDNODE\n").unwrap();
        assert!(decoded.nodes.is_empty());
        assert_eq!(decoded.issues.len(), 1);

        assert!(matches!(
            ModelCodec::strict().decode("ENDNODE\n"),
            Err(CodecError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_type_skips_node_and_keeps_its_children() {
        let text = "\
NODE BOX 1 0 0 0 0 0 0 1 1 1 1 1 1
CHILD
  NODE PYRAMID 1 0 0 0 0 0 0 1 1 1 1 1 1
  CHILD
    NODE SPHERE 1 0 0 0 0 0 0 1 1 1 1 1 1
    ENDNODE
  ENDCHILD
  ENDNODE
  NODE CONE 1 0 0 0 0 0 0 1 1 1 1 1 1
  ENDNODE
ENDCHILD
ENDNODE
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        assert_eq!(decoded.nodes.len(), 1);
        assert_eq!(
            types(decoded.nodes[0].children()),
            vec![ShapeType::Sphere, ShapeType::Cone]
        );
        assert_eq!(
            kinds(&decoded.issues),
            vec![&ParseIssueKind::UnknownShapeType("PYRAMID".to_string())]
        );
        assert_eq!(decoded.issues[0].line, 3);
    }

    #[test]
    fn test_bad_numbers_and_field_counts() {
        let text = "\
NODE BOX 1 0 0 0
ENDNODE
NODE CONE 1 0 zero 0 0 0 0 1 1 1 1 1 1
ENDNODE
NODE CYLINDER 1 0 0 0 0 0 0 1 1 1 0.5 0.5 0.5
ENDNODE
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        assert_eq!(types(&decoded.nodes), vec![ShapeType::Cylinder]);
        assert_eq!(
            kinds(&decoded.issues),
            vec![
                &ParseIssueKind::FieldCount {
                    expected: 14,
                    found: 4
                },
                &ParseIssueKind::InvalidNumber {
                    field: "ty",
                    value: "zero".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_level_out_of_range_is_clamped() {
        let text = "\
NODE SPHERE 9 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
NODE BOX 0 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        let levels: Vec<u32> = decoded
            .nodes
            .iter()
            .map(|n| n.shape().unwrap().level().get())
            .collect();
        assert_eq!(levels, vec![4, 1]);
        assert!(decoded.issues.is_empty());
    }

    #[test]
    fn test_negative_and_integral_float_levels_are_clamped() {
        let text = "\
NODE SPHERE -1 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
NODE BOX 2.0 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
NODE CONE 99999999999 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
NODE CYLINDER 1.5 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        let levels: Vec<u32> = decoded
            .nodes
            .iter()
            .map(|n| n.shape().unwrap().level().get())
            .collect();
        assert_eq!(levels, vec![1, 2, 4]);
        assert_eq!(
            decoded.issues.iter().map(|i| &i.kind).collect::<Vec<_>>(),
            vec![&ParseIssueKind::InvalidNumber {
                field: "level",
                value: "1.5".to_string()
            }]
        );
    }

    #[test]
    fn test_unclosed_nodes_are_closed_at_eof() {
        let text = "\
NODE BOX 1 0 0 0 0 0 0 1 1 1 1 1 1
CHILD
NODE SPHERE 1 0 0 0 0 0 0 1 1 1 1 1 1
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        assert_eq!(types(&decoded.nodes), vec![ShapeType::Box]);
        assert_eq!(types(decoded.nodes[0].children()), vec![ShapeType::Sphere]);
        assert_eq!(
            kinds(&decoded.issues),
            vec![
                &ParseIssueKind::UnclosedNode { opened_at: 1 },
                &ParseIssueKind::UnclosedNode { opened_at: 3 },
            ]
        );
    }

    #[test]
    fn test_unknown_directive_and_newer_version() {
        let text = "\
# Shape Modeller Hierarchy v2
NODE CONE 1 0 0 0 0 0 0 1 1 1 1 1 1
COLOR 1 0 0
ENDNODE
";
        let decoded = ModelCodec::new().decode(text).unwrap();
        assert_eq!(types(&decoded.nodes), vec![ShapeType::Cone]);
        assert_eq!(
            kinds(&decoded.issues),
            vec![
                &ParseIssueKind::UnsupportedVersion {
                    found: 2,
                    supported: 1
                },
                &ParseIssueKind::UnknownDirective("COLOR".to_string()),
            ]
        );
    }

    #[test]
    fn test_strict_mode_fails_on_first_issue() {
        let text = "\
NODE CONE 1 0 0 0 0 0 0 1 1 1 1 1 1
ENDNODE
ENDNODE
NODE PYRAMID 1 0 0 0 0 0 0 1 1 1 1 1 1
";
        match ModelCodec::strict().decode(text) {
            Err(CodecError::Parse(issue)) => {
                assert_eq!(issue.line, 3);
                assert_eq!(issue.kind, ParseIssueKind::UnmatchedEnd("ENDNODE"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_deep_nesting_is_capped() {
        let depth = MAX_DEPTH + 4;
        let mut text = String::new();
        for _ in 0..depth {
            text.push_str("NODE SPHERE 1 0 0 0 0 0 0 1 1 1 1 1 1\n");
        }
        for _ in 0..depth {
            text.push_str("ENDNODE\n");
        }

        let decoded = ModelCodec::new().decode(&text).unwrap();
        assert_eq!(decoded.shape_count(), MAX_DEPTH);
        assert_eq!(decoded.issues.len(), 4);
        assert!(decoded
            .issues
            .iter()
            .all(|i| i.kind == ParseIssueKind::TooDeep(MAX_DEPTH)));
    }

    #[test]
    fn test_write_refuses_trees_deeper_than_reader_accepts() {
        fn chain(depth: usize) -> SceneNode {
            let mut node = SceneNode::new(shape(ShapeType::Box, 1));
            for _ in 1..depth {
                let mut parent = SceneNode::new(shape(ShapeType::Box, 1));
                parent.add_child(node);
                node = parent;
            }
            node
        }

        let codec = ModelCodec::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.txt");

        let limit = vec![chain(MAX_DEPTH)];
        codec.write_file(&path, &limit).unwrap();
        let decoded = ModelCodec::strict().read_file(&path).unwrap();
        assert_eq!(decoded.shape_count(), MAX_DEPTH);

        let too_deep = vec![chain(MAX_DEPTH + 1)];
        match codec.write_file(&path, &too_deep) {
            Err(CodecError::TooDeep { depth, max }) => {
                assert_eq!(depth, MAX_DEPTH + 1);
                assert_eq!(max, MAX_DEPTH);
            }
            other => panic!("expected depth error, got {:?}", other),
        }
        // previous file is untouched and no temp file is left behind
        assert_eq!(ModelCodec::new().read_file(&path).unwrap().shape_count(), MAX_DEPTH);
        assert!(!temp_sibling(&path).exists());
    }

    #[test]
    fn test_shapeless_nodes_are_hoisted_on_encode() {
        let mut group = SceneNode::group();
        group.add_child(SceneNode::new(shape(ShapeType::Box, 1)));
        group.add_child(SceneNode::new(shape(ShapeType::Cone, 1)));

        let codec = ModelCodec::new();
        let decoded = codec.decode(&codec.encode(&[group])).unwrap();
        assert_eq!(types(&decoded.nodes), vec![ShapeType::Box, ShapeType::Cone]);
    }
}
