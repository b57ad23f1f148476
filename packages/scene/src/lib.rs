//! # Handoff Scene
//!
//! Typed model of a design-tool selection. The exporter serializes each
//! selected node as a JSON object; [`parse_selection`] turns that into a tree
//! of [`SceneNode`]s where every node is exactly one of text, shape or
//! container, and every depth is consistent with the tree shape.

pub mod ast;
pub mod error;
pub mod ingest;

pub use ast::{
    NodeContent, NodeKind, Position, Rgba, SceneNode, Selection, ShapeStyle, Size, TextContent,
};
pub use error::{ParseError, ParseResult};
pub use ingest::{parse_selection, selection_from_value, RawNode};
