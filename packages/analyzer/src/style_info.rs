use handoff_common::{walk_node, walk_nodes, Visitor};
use handoff_scene::{parse_selection, NodeContent, Position, Rgba, SceneNode, Selection, Size};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Visual facts collected from a scene tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleInfo {
    /// `#rrggbb` strings, first-seen order, no duplicates
    pub colors: Vec<String>,
    /// Font families, first-seen order, no duplicates
    pub fonts: Vec<String>,
    pub sizes: Vec<Size>,
    pub positions: Vec<Position>,
}

impl StyleInfo {
    fn add_color(&mut self, color: Option<&Rgba>) {
        if let Some(color) = color {
            let hex = rgb_to_hex(color.r, color.g, color.b);
            if !self.colors.contains(&hex) {
                self.colors.push(hex);
            }
        }
    }

    fn add_font(&mut self, family: Option<&String>) {
        if let Some(family) = family {
            if !self.fonts.contains(family) {
                self.fonts.push(family.clone());
            }
        }
    }
}

/// Convert 0-255 channels to `#rrggbb`.
///
/// Channels are rounded to the nearest integer and clamped to 0-255;
/// non-finite channels become 0.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    fn channel(value: f64) -> u8 {
        if value.is_finite() {
            value.round().clamp(0.0, 255.0) as u8
        } else {
            0
        }
    }
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

impl Visitor for StyleInfo {
    fn visit_node(&mut self, node: &SceneNode) {
        match &node.content {
            NodeContent::Text(text) => {
                self.add_color(text.color.as_ref());
            }
            NodeContent::Shape(style) | NodeContent::Container { style, .. } => {
                self.add_color(style.background_color.as_ref());
                self.add_color(style.border_color.as_ref());
            }
        }

        if let Some(size) = node.size {
            self.sizes.push(size);
        }
        if let Some(position) = node.position {
            self.positions.push(position);
        }
        if let Some(text) = node.text_content() {
            self.add_font(text.font_family.as_ref());
        }

        walk_node(self, node);
    }
}

/// Collect colors, fonts, sizes and positions from the root nodes of a selection
#[instrument(skip_all, fields(roots = nodes.len()))]
pub fn extract_style_info(nodes: &[SceneNode]) -> StyleInfo {
    let mut info = StyleInfo::default();
    walk_nodes(&mut info, nodes);
    debug!(colors = info.colors.len(), fonts = info.fonts.len(), "Style extraction complete");
    info
}

pub fn extract_selection_style(selection: &Selection) -> StyleInfo {
    extract_style_info(&selection.nodes)
}

/// Extract from exported JSON. Unparseable input yields empty style info.
pub fn extract_style_json(json: &str) -> StyleInfo {
    match parse_selection(json) {
        Ok(selection) => extract_selection_style(&selection),
        Err(err) => {
            warn!(error = %err, "Could not read scene tree, returning empty style info");
            StyleInfo::default()
        }
    }
}
