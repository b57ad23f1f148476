use handoff_scene::Size;
use serde::{Deserialize, Serialize};

/// Structural region a top-level node should be rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticTag {
    Header,
    Nav,
    Main,
    Section,
    Aside,
    Footer,
}

impl SemanticTag {
    /// Infer the region from a node name. First match wins, `section` otherwise.
    pub fn infer(name: &str) -> Self {
        let name = name.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|needle| name.contains(needle));

        if has(&["header", "top"]) {
            SemanticTag::Header
        } else if has(&["nav", "menu"]) {
            SemanticTag::Nav
        } else if has(&["main", "content"]) {
            SemanticTag::Main
        } else if has(&["footer", "bottom"]) {
            SemanticTag::Footer
        } else if has(&["sidebar", "aside"]) {
            SemanticTag::Aside
        } else {
            SemanticTag::Section
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticTag::Header => "header",
            SemanticTag::Nav => "nav",
            SemanticTag::Main => "main",
            SemanticTag::Section => "section",
            SemanticTag::Aside => "aside",
            SemanticTag::Footer => "footer",
        }
    }
}

impl std::fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reusable component category, named after its `component-` class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "component-btns")]
    Buttons,
    #[serde(rename = "component-input")]
    Input,
    #[serde(rename = "component-tab")]
    Tab,
    #[serde(rename = "component-table")]
    Table,
}

impl ComponentKind {
    /// Classify a node name. A name maps to at most one category.
    pub fn classify(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|needle| name.contains(needle));

        if has(&["button", "btn"]) {
            Some(ComponentKind::Buttons)
        } else if has(&["input", "form"]) {
            Some(ComponentKind::Input)
        } else if has(&["tab"]) {
            Some(ComponentKind::Tab)
        } else if has(&["table"]) {
            Some(ComponentKind::Table)
        } else {
            None
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            ComponentKind::Buttons => "component-btns",
            ComponentKind::Input => "component-input",
            ComponentKind::Tab => "component-tab",
            ComponentKind::Table => "component-table",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A container whose children repeat one node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStructure {
    pub parent_name: String,
    pub item_count: usize,
    pub recommended_tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub text: String,
    pub is_title: bool,
    pub font_size: Option<f64>,
    /// `h1`..`h6` for titles, `p` otherwise
    pub recommended_tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonElement {
    pub name: String,
    pub recommended_tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub name: String,
    pub size: Option<Size>,
    pub recommended_tag: String,
}

/// Layout recommendations inferred from a scene tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// One entry per top-level node, in selection order
    pub semantic_tags: Vec<SemanticTag>,
    /// Every classified component, duplicates included
    pub component_types: Vec<ComponentKind>,
    pub list_structures: Vec<ListStructure>,
    pub text_elements: Vec<TextElement>,
    pub button_elements: Vec<ButtonElement>,
    pub image_elements: Vec<ImageElement>,
    /// Human-readable summary derived from the fields above
    pub recommended_structure: String,
}

impl AnalysisResult {
    pub fn has_semantic_tag(&self, tag: SemanticTag) -> bool {
        self.semantic_tags.contains(&tag)
    }

    /// Component categories in first-seen order, without duplicates
    pub fn unique_components(&self) -> Vec<ComponentKind> {
        let mut unique = Vec::new();
        for kind in &self.component_types {
            if !unique.contains(kind) {
                unique.push(*kind);
            }
        }
        unique
    }

    /// True when no analysis field holds anything
    pub fn is_empty(&self) -> bool {
        self.semantic_tags.is_empty()
            && self.component_types.is_empty()
            && self.list_structures.is_empty()
            && self.text_elements.is_empty()
            && self.button_elements.is_empty()
            && self.image_elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_priority_order() {
        assert_eq!(SemanticTag::infer("header-wrap"), SemanticTag::Header);
        assert_eq!(SemanticTag::infer("Top Bar"), SemanticTag::Header);
        // "header" wins over "nav"
        assert_eq!(SemanticTag::infer("header-nav"), SemanticTag::Header);
        assert_eq!(SemanticTag::infer("MainMenu"), SemanticTag::Nav);
        assert_eq!(SemanticTag::infer("page content"), SemanticTag::Main);
        assert_eq!(SemanticTag::infer("bottom links"), SemanticTag::Footer);
        assert_eq!(SemanticTag::infer("Sidebar"), SemanticTag::Aside);
        assert_eq!(SemanticTag::infer("Frame 12"), SemanticTag::Section);
    }

    #[test]
    fn test_component_first_match_wins() {
        assert_eq!(ComponentKind::classify("Primary Button"), Some(ComponentKind::Buttons));
        assert_eq!(ComponentKind::classify("form-btn"), Some(ComponentKind::Buttons));
        assert_eq!(ComponentKind::classify("search input"), Some(ComponentKind::Input));
        assert_eq!(ComponentKind::classify("Tabs"), Some(ComponentKind::Tab));
        // "table" contains "tab", so it never reaches the table branch
        assert_eq!(ComponentKind::classify("price table"), Some(ComponentKind::Tab));
        assert_eq!(ComponentKind::classify("card"), None);
    }

    #[test]
    fn test_serialized_shape() {
        let result = AnalysisResult {
            semantic_tags: vec![SemanticTag::Header],
            component_types: vec![ComponentKind::Buttons],
            ..Default::default()
        };
        let json = serde_json::to_value(&result).expect("Failed to serialize");
        assert_eq!(json["semanticTags"][0], "header");
        assert_eq!(json["componentTypes"][0], "component-btns");
        assert!(json["listStructures"].as_array().is_some());
    }

    #[test]
    fn test_unique_components_keeps_first_seen_order() {
        let result = AnalysisResult {
            component_types: vec![
                ComponentKind::Tab,
                ComponentKind::Buttons,
                ComponentKind::Tab,
            ],
            ..Default::default()
        };
        assert_eq!(
            result.unique_components(),
            vec![ComponentKind::Tab, ComponentKind::Buttons]
        );
    }
}
