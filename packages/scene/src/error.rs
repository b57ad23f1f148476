use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected root: expected a selection document, an array of nodes or a node, found {found}")]
    UnexpectedRoot { found: String },

    #[error("Invalid node at {path}: {message}")]
    InvalidNode { path: String, message: String },
}

impl ParseError {
    pub fn unexpected_root(found: impl Into<String>) -> Self {
        Self::UnexpectedRoot {
            found: found.into(),
        }
    }

    pub fn invalid_node(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidNode {
            path: path.into(),
            message: message.into(),
        }
    }
}
