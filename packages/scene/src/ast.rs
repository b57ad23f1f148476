use serde::{Deserialize, Serialize};

/// Top-left corner of a node in design coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Bounding box dimensions of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Solid paint color. `r`, `g`, `b` are 0-255, `a` is 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Node type as reported by the design tool
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Section,
    BooleanOperation,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Polygon,
    Star,
    Other(String),
}

impl NodeKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "TEXT" => NodeKind::Text,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "COMPONENT" => NodeKind::Component,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "INSTANCE" => NodeKind::Instance,
            "SECTION" => NodeKind::Section,
            "BOOLEAN_OPERATION" => NodeKind::BooleanOperation,
            "RECTANGLE" => NodeKind::Rectangle,
            "ELLIPSE" => NodeKind::Ellipse,
            "VECTOR" => NodeKind::Vector,
            "LINE" => NodeKind::Line,
            "POLYGON" => NodeKind::Polygon,
            "STAR" => NodeKind::Star,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            NodeKind::Text => "TEXT",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Section => "SECTION",
            NodeKind::BooleanOperation => "BOOLEAN_OPERATION",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Vector => "VECTOR",
            NodeKind::Line => "LINE",
            NodeKind::Polygon => "POLYGON",
            NodeKind::Star => "STAR",
            NodeKind::Other(name) => name,
        }
    }

    /// Kinds that own children even when the exported list is empty
    pub fn is_container_kind(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame
                | NodeKind::Group
                | NodeKind::Component
                | NodeKind::ComponentSet
                | NodeKind::Instance
                | NodeKind::Section
                | NodeKind::BooleanOperation
        )
    }

    /// The two primitive shapes treated as image placeholders
    pub fn is_primitive_shape(&self) -> bool {
        matches!(self, NodeKind::Rectangle | NodeKind::Ellipse)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Typography of a text node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextContent {
    pub text: String,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    /// First solid fill, i.e. the text color
    pub color: Option<Rgba>,
}

/// Paint and border of a shape or container
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeStyle {
    pub background_color: Option<Rgba>,
    pub border_color: Option<Rgba>,
    pub border_width: Option<f64>,
    pub border_radius: Option<f64>,
}

/// Variant payload of a scene node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Text(TextContent),
    Shape(ShapeStyle),
    Container {
        style: ShapeStyle,
        children: Vec<SceneNode>,
    },
}

/// A node of the exported design selection
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub visible: bool,
    /// Distance from the selection root, assigned during ingestion
    pub depth: usize,
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub content: NodeContent,
}

impl SceneNode {
    fn new(name: impl Into<String>, kind: NodeKind, content: NodeContent) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            kind,
            visible: true,
            depth: 0,
            position: None,
            size: None,
            content,
        }
    }

    /// Create a text node
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            name,
            NodeKind::Text,
            NodeContent::Text(TextContent {
                text: text.into(),
                ..Default::default()
            }),
        )
    }

    /// Create a leaf shape node of the given kind
    pub fn shape(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::new(name, kind, NodeContent::Shape(ShapeStyle::default()))
    }

    /// Create a container node owning `children`
    pub fn container(kind: NodeKind, name: impl Into<String>, children: Vec<SceneNode>) -> Self {
        Self::new(
            name,
            kind,
            NodeContent::Container {
                style: ShapeStyle::default(),
                children,
            },
        )
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size { width, height });
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position { x, y });
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        if let NodeContent::Text(text) = &mut self.content {
            text.font_size = Some(font_size);
        }
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        if let NodeContent::Text(text) = &mut self.content {
            text.font_family = Some(family.into());
        }
        self
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        if let Some(style) = self.shape_style_mut() {
            style.background_color = Some(color);
        } else if let NodeContent::Text(text) = &mut self.content {
            text.color = Some(color);
        }
        self
    }

    pub fn with_border(mut self, color: Rgba, width: f64) -> Self {
        if let Some(style) = self.shape_style_mut() {
            style.border_color = Some(color);
            style.border_width = Some(width);
        }
        self
    }

    pub fn children(&self) -> &[SceneNode] {
        match &self.content {
            NodeContent::Container { children, .. } => children,
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&TextContent> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn shape_style(&self) -> Option<&ShapeStyle> {
        match &self.content {
            NodeContent::Shape(style) | NodeContent::Container { style, .. } => Some(style),
            NodeContent::Text(_) => None,
        }
    }

    fn shape_style_mut(&mut self) -> Option<&mut ShapeStyle> {
        match &mut self.content {
            NodeContent::Shape(style) | NodeContent::Container { style, .. } => Some(style),
            NodeContent::Text(_) => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.content, NodeContent::Container { .. })
    }

    /// Case-insensitive substring test against the node name
    pub fn name_contains_any(&self, needles: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        needles.iter().any(|needle| name.contains(needle))
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Rewrite `depth` for this subtree so that children sit one level below their parent
    pub fn assign_depths(&mut self, depth: usize) {
        self.depth = depth;
        if let NodeContent::Container { children, .. } = &mut self.content {
            for child in children {
                child.assign_depths(depth + 1);
            }
        }
    }
}

/// The ordered root nodes of a design selection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Name of the design file the selection came from, when exported
    pub file_name: Option<String>,
    pub nodes: Vec<SceneNode>,
}

impl Selection {
    /// Build a selection from root nodes, normalizing every depth
    pub fn new(mut nodes: Vec<SceneNode>) -> Self {
        for node in &mut nodes {
            node.assign_depths(0);
        }
        Self {
            file_name: None,
            nodes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(SceneNode::node_count).sum()
    }
}
