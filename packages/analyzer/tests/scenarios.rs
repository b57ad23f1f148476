use handoff_analyzer::*;
use handoff_scene::{parse_selection, NodeKind, SceneNode, Selection};

fn landing_page() -> &'static str {
    r#"{
        "selection": [
            {
                "id": "1:1", "name": "header-wrap", "type": "FRAME", "visible": true, "depth": 0,
                "children": [
                    { "id": "1:2", "name": "Page Title", "type": "TEXT", "visible": true, "depth": 1,
                      "text": "Welcome home", "fontSize": 32, "fontFamily": "Inter", "children": [] },
                    { "id": "1:3", "name": "nav-menu", "type": "FRAME", "visible": true, "depth": 1,
                      "children": [
                        { "id": "1:4", "name": "link", "type": "TEXT", "text": "Home", "fontSize": 14, "children": [] },
                        { "id": "1:5", "name": "link", "type": "TEXT", "text": "About", "fontSize": 14, "children": [] },
                        { "id": "1:6", "name": "link", "type": "TEXT", "text": "Contact", "fontSize": 14, "children": [] }
                      ] }
                ]
            },
            {
                "id": "2:1", "name": "gallery", "type": "FRAME", "visible": true, "depth": 0,
                "children": [
                    { "id": "2:2", "name": "tile", "type": "RECTANGLE", "size": {"width": 100, "height": 100}, "children": [] },
                    { "id": "2:3", "name": "tile", "type": "RECTANGLE", "size": {"width": 100, "height": 100}, "children": [] },
                    { "id": "2:4", "name": "tile", "type": "RECTANGLE", "size": {"width": 100, "height": 100}, "children": [] },
                    { "id": "2:5", "name": "tile", "type": "RECTANGLE", "size": {"width": 100, "height": 100}, "children": [] }
                ]
            },
            {
                "id": "3:1", "name": "Footer", "type": "FRAME", "visible": true, "depth": 0,
                "children": [
                    { "id": "3:2", "name": "cta-button", "type": "INSTANCE", "children": [
                        { "id": "3:3", "name": "label", "type": "TEXT", "text": "Sign up", "children": [] }
                    ] }
                ]
            }
        ]
    }"#
}

#[test]
fn test_header_frame_yields_header_tag() {
    let selection = Selection::new(vec![SceneNode::container(
        NodeKind::Frame,
        "header-wrap",
        vec![SceneNode::text("logo text", "Acme")],
    )]);

    let result = analyze_selection(&selection);
    assert!(result.semantic_tags.contains(&SemanticTag::Header));
}

#[test]
fn test_four_rectangles_form_one_list() {
    let tiles = (0..4)
        .map(|i| SceneNode::shape(NodeKind::Rectangle, format!("tile {}", i)))
        .collect();
    let result = analyze(&[SceneNode::container(NodeKind::Frame, "grid", tiles)]);

    assert_eq!(result.list_structures.len(), 1);
    assert_eq!(result.list_structures[0].item_count, 4);
    assert_eq!(result.list_structures[0].parent_name, "grid");
    assert_eq!(result.list_structures[0].recommended_tag, "ul/li");
}

#[test]
fn test_landing_page_analysis() {
    let result = analyze_json(landing_page());

    assert_eq!(
        result.semantic_tags,
        vec![SemanticTag::Header, SemanticTag::Section, SemanticTag::Footer]
    );

    // nav-menu (3 texts) and gallery (4 rectangles)
    let lists: Vec<(&str, usize)> = result
        .list_structures
        .iter()
        .map(|list| (list.parent_name.as_str(), list.item_count))
        .collect();
    assert_eq!(lists, vec![("nav-menu", 3), ("gallery", 4)]);

    let title = &result.text_elements[0];
    assert!(title.is_title);
    assert_eq!(title.recommended_tag, "h2");
    assert!(result.text_elements[1..].iter().all(|text| !text.is_title));

    assert_eq!(result.component_types, vec![ComponentKind::Buttons]);
    assert_eq!(result.button_elements.len(), 1);
    assert_eq!(result.button_elements[0].name, "cta-button");

    assert_eq!(result.image_elements.len(), 4);
    assert!(result.image_elements.iter().all(|image| image.size.is_some()));

    let summary = &result.recommended_structure;
    assert!(summary.contains("<header>"));
    assert!(summary.contains("<section>"));
    assert!(summary.contains("<footer>"));
    assert!(summary.contains("2 ul/li"));
    assert!(summary.contains("component-btns"));
    assert!(summary.contains("4 figure/img"));
}

#[test]
fn test_recommendation_is_a_function_of_the_fields() {
    let result = analyze_json(landing_page());
    assert_eq!(result.recommended_structure, format_recommendation(&result));
}

#[test]
fn test_analysis_is_deterministic() {
    let selection = parse_selection(landing_page()).expect("Failed to parse");

    let results: Vec<AnalysisResult> = (0..5).map(|_| analyze_selection(&selection)).collect();
    for (i, result) in results.iter().enumerate().skip(1) {
        assert_eq!(&results[0], result, "Analysis {} differs from analysis 0", i);
    }

    let styles: Vec<StyleInfo> = (0..5).map(|_| extract_selection_style(&selection)).collect();
    for style in &styles[1..] {
        assert_eq!(&styles[0], style);
    }
}

#[test]
fn test_empty_selection() {
    let result = analyze(&[]);
    assert!(result.is_empty());
    assert_eq!(result.recommended_structure, EMPTY_RECOMMENDATION);

    let from_null = analyze_json("null");
    assert_eq!(from_null, result);
}

#[test]
fn test_style_info_from_json() {
    let info = extract_style_json(
        r#"[{"name": "card", "type": "FRAME",
             "backgroundColor": {"r": 59, "g": 130, "b": 246, "a": 1},
             "borderColor": {"r": 59.4, "g": 130.2, "b": 245.6, "a": 0.5},
             "children": [
                {"name": "t", "type": "TEXT", "text": "x", "fontFamily": "Inter"},
                {"name": "u", "type": "TEXT", "text": "y", "fontFamily": "Roboto"},
                {"name": "v", "type": "TEXT", "text": "z", "fontFamily": "Inter"}
             ]}]"#,
    );

    assert_eq!(info.colors, vec!["#3b82f6"]);
    assert_eq!(info.fonts, vec!["Inter", "Roboto"]);
}

/// `levels` nested frames around one title text
fn frame_chain(levels: usize) -> String {
    let mut json =
        r#"{"name": "title", "type": "TEXT", "text": "Deep title", "fontFamily": "Inter"}"#.to_string();
    for level in (0..levels).rev() {
        json = format!(r#"{{"name": "frame-{}", "type": "FRAME", "children": [{}]}}"#, level, json);
    }
    format!(r#"{{"selection": [{}]}}"#, json)
}

#[test]
fn test_deeply_nested_tree_is_fully_analyzed() {
    let json = frame_chain(200);

    let result = analyze_json(&json);
    assert_eq!(result.semantic_tags, vec![SemanticTag::Section]);
    assert_eq!(result.text_elements.len(), 1);
    assert_eq!(result.text_elements[0].text, "Deep title");
    assert_eq!(result.text_elements[0].recommended_tag, "h6");

    let info = extract_style_json(&json);
    assert_eq!(info.fonts, vec!["Inter"]);
}
