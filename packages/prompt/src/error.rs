use thiserror::Error;

pub type PromptResult<T> = Result<T, PromptError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PromptError {
    #[error("No selection loaded; load a scene tree first")]
    MissingSelection,

    #[error("No markup to build a stylesheet from")]
    MissingMarkup,
}
