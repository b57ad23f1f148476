use handoff_scene::{NodeContent, SceneNode, Selection, ShapeStyle, TextContent};

/// Visitor pattern for traversing scene trees immutably
///
/// This trait provides default implementations that walk the entire tree
/// depth-first, in child order. Override specific visit_* methods to act on
/// nodes; call the matching walk_* function to keep descending.
pub trait Visitor: Sized {
    fn visit_selection(&mut self, selection: &Selection) {
        walk_nodes(self, &selection.nodes);
    }

    /// Called for every node before the variant-specific hook
    fn visit_node(&mut self, node: &SceneNode) {
        walk_node(self, node);
    }

    fn visit_text(&mut self, _node: &SceneNode, _text: &TextContent) {
        // Leaf node, no children to walk
    }

    fn visit_shape(&mut self, _node: &SceneNode, _style: &ShapeStyle) {
        // Leaf node, no children to walk
    }

    fn visit_container(&mut self, _node: &SceneNode, _style: &ShapeStyle, children: &[SceneNode]) {
        walk_nodes(self, children);
    }
}

pub fn walk_nodes<V: Visitor>(visitor: &mut V, nodes: &[SceneNode]) {
    for node in nodes {
        visitor.visit_node(node);
    }
}

/// Dispatch to the hook for the node's variant
pub fn walk_node<V: Visitor>(visitor: &mut V, node: &SceneNode) {
    match &node.content {
        NodeContent::Text(text) => visitor.visit_text(node, text),
        NodeContent::Shape(style) => visitor.visit_shape(node, style),
        NodeContent::Container { style, children } => {
            visitor.visit_container(node, style, children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handoff_scene::NodeKind;

    #[derive(Default)]
    struct Recorder {
        order: Vec<String>,
        texts: usize,
        shapes: usize,
        containers: usize,
    }

    impl Visitor for Recorder {
        fn visit_node(&mut self, node: &SceneNode) {
            self.order.push(format!("{}@{}", node.name, node.depth));
            walk_node(self, node);
        }

        fn visit_text(&mut self, _node: &SceneNode, _text: &TextContent) {
            self.texts += 1;
        }

        fn visit_shape(&mut self, _node: &SceneNode, _style: &ShapeStyle) {
            self.shapes += 1;
        }

        fn visit_container(&mut self, _node: &SceneNode, _style: &ShapeStyle, children: &[SceneNode]) {
            self.containers += 1;
            walk_nodes(self, children);
        }
    }

    #[test]
    fn test_walks_depth_first_in_child_order() {
        let selection = Selection::new(vec![
            SceneNode::container(
                NodeKind::Frame,
                "a",
                vec![
                    SceneNode::container(NodeKind::Group, "b", vec![SceneNode::text("c", "x")]),
                    SceneNode::shape(NodeKind::Rectangle, "d"),
                ],
            ),
            SceneNode::text("e", "y"),
        ]);

        let mut recorder = Recorder::default();
        recorder.visit_selection(&selection);

        assert_eq!(recorder.order, vec!["a@0", "b@1", "c@2", "d@1", "e@0"]);
        assert_eq!(recorder.texts, 2);
        assert_eq!(recorder.shapes, 1);
        assert_eq!(recorder.containers, 2);
    }
}
