use handoff_scene::ParseError;
use thiserror::Error;

/// Common error type shared by the tooling around the core algorithms
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
