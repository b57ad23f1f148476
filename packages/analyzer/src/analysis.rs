use crate::structure::format_recommendation;
use crate::types::*;
use handoff_common::{walk_node, walk_nodes, Visitor};
use handoff_scene::{parse_selection, SceneNode, Selection, ShapeStyle, TextContent};
use tracing::{debug, info, instrument, warn};

/// Texts at or above this many characters are never titles
const TITLE_MAX_CHARS: usize = 50;
/// Font size above which a short text counts as a title
const TITLE_FONT_SIZE: f64 = 20.0;
/// Containers need more children than this to be list candidates
const LIST_MIN_CHILDREN: usize = 2;

const TITLE_NAME_HINTS: &[&str] = &["title", "heading", "header"];
const IMAGE_NAME_HINTS: &[&str] = &["image", "img", "photo", "picture"];

/// Whether a text node should render as a heading
pub fn is_title(name: &str, text: &str, font_size: Option<f64>) -> bool {
    if text.chars().count() >= TITLE_MAX_CHARS {
        return false;
    }
    let name = name.to_lowercase();
    TITLE_NAME_HINTS.iter().any(|hint| name.contains(hint))
        || font_size.is_some_and(|size| size > TITLE_FONT_SIZE)
}

/// Heading tag for a title found at `depth`, capped at `h6`
pub fn heading_tag(depth: usize) -> String {
    format!("h{}", (depth + 1).min(6))
}

/// Whether every child shares the node type of the first child
pub fn is_repeating(children: &[SceneNode]) -> bool {
    match children.split_first() {
        Some((first, rest)) if children.len() > LIST_MIN_CHILDREN => {
            rest.iter().all(|child| child.kind == first.kind)
        }
        _ => false,
    }
}

/// Primitive shapes and image-like names are image placeholders
pub fn is_image_candidate(node: &SceneNode) -> bool {
    node.kind.is_primitive_shape() || node.name_contains_any(IMAGE_NAME_HINTS)
}

/// Collects layout facts while walking the tree
///
/// Depth is tracked by the walk itself, so trees built by hand with stale
/// `depth` fields still produce correct heading levels.
#[derive(Default)]
struct StructureCollector {
    depth: usize,
    result: AnalysisResult,
}

impl Visitor for StructureCollector {
    fn visit_node(&mut self, node: &SceneNode) {
        if self.depth == 0 {
            self.result.semantic_tags.push(SemanticTag::infer(&node.name));
        }

        walk_node(self, node);

        if is_image_candidate(node) {
            self.result.image_elements.push(ImageElement {
                name: node.name.clone(),
                size: node.size,
                recommended_tag: "figure/img".to_string(),
            });
        }
    }

    fn visit_text(&mut self, node: &SceneNode, text: &TextContent) {
        if text.text.is_empty() {
            return;
        }

        let is_title = is_title(&node.name, &text.text, text.font_size);
        self.result.text_elements.push(TextElement {
            text: text.text.clone(),
            is_title,
            font_size: text.font_size,
            recommended_tag: if is_title {
                heading_tag(self.depth)
            } else {
                "p".to_string()
            },
        });
    }

    fn visit_container(&mut self, node: &SceneNode, _style: &ShapeStyle, children: &[SceneNode]) {
        if is_repeating(children) {
            debug!(parent = %node.name, items = children.len(), "Found repeating structure");
            self.result.list_structures.push(ListStructure {
                parent_name: node.name.clone(),
                item_count: children.len(),
                recommended_tag: "ul/li".to_string(),
            });
        }

        if let Some(kind) = ComponentKind::classify(&node.name) {
            self.result.component_types.push(kind);
            if kind == ComponentKind::Buttons {
                self.result.button_elements.push(ButtonElement {
                    name: node.name.clone(),
                    recommended_tag: "button".to_string(),
                });
            }
        }

        self.depth += 1;
        walk_nodes(self, children);
        self.depth -= 1;
    }
}

/// Infer semantic layout recommendations from the root nodes of a selection
#[instrument(skip_all, fields(roots = nodes.len()))]
pub fn analyze(nodes: &[SceneNode]) -> AnalysisResult {
    let mut collector = StructureCollector::default();
    walk_nodes(&mut collector, nodes);

    let mut result = collector.result;
    result.recommended_structure = format_recommendation(&result);

    info!(
        semantic_tags = result.semantic_tags.len(),
        lists = result.list_structures.len(),
        texts = result.text_elements.len(),
        images = result.image_elements.len(),
        "Structure analysis complete"
    );
    result
}

pub fn analyze_selection(selection: &Selection) -> AnalysisResult {
    analyze(&selection.nodes)
}

/// Analyze exported JSON. Unparseable input yields the empty result.
pub fn analyze_json(json: &str) -> AnalysisResult {
    match parse_selection(json) {
        Ok(selection) => analyze_selection(&selection),
        Err(err) => {
            warn!(error = %err, "Could not read scene tree, returning empty analysis");
            analyze(&[])
        }
    }
}
