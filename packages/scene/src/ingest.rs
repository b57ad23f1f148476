//! Conversion between the exported JSON tree and [`SceneNode`].
//!
//! The exporter emits one loosely-typed object per node. Node variants are
//! decided once here, from the `type` field and the presence of children, so
//! the analyzers can dispatch on [`NodeContent`] instead of probing fields.

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Wire format of a single node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default)]
    pub children: Option<Vec<RawNode>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectionDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    figma_file: Option<FileInfo<'a>>,
    selection: Vec<RawNode>,
}

#[derive(Serialize)]
struct FileInfo<'a> {
    name: &'a str,
}

/// Parse an exported selection.
///
/// Accepts `{ "selection": [...] }`, a bare array of nodes, or a single node.
/// `null` yields an empty selection. Depths in the input are ignored and
/// recomputed from the tree shape. Nesting depth is not limited; the stack
/// grows on demand while decoding.
#[instrument(skip_all)]
pub fn parse_selection(json: &str) -> ParseResult<Selection> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    selection_from_value(value)
}

/// Same as [`parse_selection`] for an already-decoded JSON value
pub fn selection_from_value(value: Value) -> ParseResult<Selection> {
    let (file_name, raw_nodes) = match value {
        Value::Null => (None, Vec::new()),
        Value::Array(items) => (None, items),
        Value::Object(mut map) => match map.remove("selection") {
            Some(Value::Array(items)) => (file_name_of(&map), items),
            Some(Value::Null) => (file_name_of(&map), Vec::new()),
            Some(other) => {
                return Err(ParseError::unexpected_root(format!(
                    "selection of type {}",
                    value_kind(&other)
                )))
            }
            None => (None, vec![Value::Object(map)]),
        },
        other => return Err(ParseError::unexpected_root(value_kind(&other))),
    };

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for (index, item) in raw_nodes.into_iter().enumerate() {
        let raw = RawNode::deserialize(serde_stacker::Deserializer::new(item))
            .map_err(|err| ParseError::invalid_node(format!("selection[{}]", index), err.to_string()))?;
        nodes.push(build_node(raw, 0));
    }

    debug!(roots = nodes.len(), "Parsed selection");
    Ok(Selection { file_name, nodes })
}

fn file_name_of(map: &serde_json::Map<String, Value>) -> Option<String> {
    map.get("figmaFile")
        .or_else(|| map.get("file"))
        .and_then(|file| file.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn build_node(raw: RawNode, depth: usize) -> SceneNode {
    let kind = NodeKind::from_type_name(&raw.node_type);
    let raw_children = raw.children.unwrap_or_default();

    let content = if kind == NodeKind::Text {
        if !raw_children.is_empty() {
            debug!(node = %raw.name, "Dropping children of text node");
        }
        NodeContent::Text(TextContent {
            text: raw.text.unwrap_or_default(),
            font_size: raw.font_size,
            font_family: raw.font_family,
            font_weight: raw.font_weight,
            color: raw.background_color,
        })
    } else {
        let style = ShapeStyle {
            background_color: raw.background_color,
            border_color: raw.border_color,
            border_width: raw.border_width,
            border_radius: raw.border_radius,
        };
        if kind.is_container_kind() || !raw_children.is_empty() {
            NodeContent::Container {
                style,
                children: raw_children
                    .into_iter()
                    .map(|child| build_node(child, depth + 1))
                    .collect(),
            }
        } else {
            NodeContent::Shape(style)
        }
    };

    SceneNode {
        id: raw.id,
        name: raw.name,
        kind,
        visible: raw.visible.unwrap_or(true),
        depth,
        position: raw.position,
        size: raw.size,
        content,
    }
}

impl From<&SceneNode> for RawNode {
    fn from(node: &SceneNode) -> Self {
        let mut raw = RawNode {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.kind.type_name().to_string(),
            visible: Some(node.visible),
            depth: node.depth,
            position: node.position,
            size: node.size,
            children: Some(node.children().iter().map(RawNode::from).collect()),
            ..Default::default()
        };

        match &node.content {
            NodeContent::Text(text) => {
                raw.text = Some(text.text.clone());
                raw.font_size = text.font_size;
                raw.font_family = text.font_family.clone();
                raw.font_weight = text.font_weight.clone();
                raw.background_color = text.color;
            }
            NodeContent::Shape(style) | NodeContent::Container { style, .. } => {
                raw.background_color = style.background_color;
                raw.border_color = style.border_color;
                raw.border_width = style.border_width;
                raw.border_radius = style.border_radius;
            }
        }

        raw
    }
}

impl Selection {
    /// Re-emit the selection in the exporter's JSON shape.
    ///
    /// Returns an empty string if serialization fails.
    pub fn to_json_pretty(&self) -> String {
        let document = SelectionDocument {
            figma_file: self.file_name.as_deref().map(|name| FileInfo { name }),
            selection: self.nodes.iter().map(RawNode::from).collect(),
        };
        serde_json::to_string_pretty(&document).unwrap_or_default()
    }
}
