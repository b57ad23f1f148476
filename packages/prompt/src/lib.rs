//! # Handoff Prompt
//!
//! Builds the prompts for the markup and stylesheet generation rounds and
//! post-processes the model's responses.
//!
//! A [`GenerationSession`] chains the rounds: the selection is loaded once,
//! accepted markup feeds the stylesheet prompt, and the classes of an
//! accepted stylesheet constrain the next markup prompt.

pub mod code_block;
pub mod error;
pub mod markup;
mod patterns;
pub mod prompts;
pub mod session;
pub mod wrapper;

pub use code_block::extract_code_block;
pub use error::{PromptError, PromptResult};
pub use markup::{summarize_markup, InteractiveElement, InteractiveKind, MarkupSummary};
pub use prompts::{html_prompt, html_prompt_with_classes, scss_prompt, scss_prompt_from_markup};
pub use session::{GenerationSession, NormalizeOptions, ScssOutcome};
pub use wrapper::{ensure_wrapper_class, pick_wrapper_class};
