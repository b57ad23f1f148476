use crate::code_block::extract_code_block;
use crate::error::{PromptError, PromptResult};
use crate::prompts::{html_prompt, html_prompt_with_classes, scss_prompt, scss_prompt_from_markup};
use crate::wrapper::{ensure_wrapper_class, pick_wrapper_class};
use handoff_analyzer::{analyze_selection, extract_selection_style, AnalysisResult, StyleInfo};
use handoff_normalizer::{class_names_from_stylesheet, normalize_html, normalize_scss_with, ScssOptions};
use handoff_scene::Selection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Options applied to every accepted response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizeOptions {
    pub scss: ScssOptions,
    /// Put the first known stylesheet class on the markup's top-level tag
    pub enforce_wrapper_class: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            scss: ScssOptions::default(),
            enforce_wrapper_class: true,
        }
    }
}

/// Result of accepting a stylesheet response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScssOutcome {
    pub code: String,
    /// Classes the stylesheet defines, fed into the next markup round
    pub classes: Vec<String>,
    /// Style facts of the loaded selection, empty without one
    pub style_info: StyleInfo,
}

/// State carried between generation rounds
///
/// Holds the selection being worked on, the last accepted markup and the
/// classes of the last accepted stylesheet. Loading a new selection clears
/// the other two.
#[derive(Debug, Clone, Default)]
pub struct GenerationSession {
    options: NormalizeOptions,
    last_selection: Option<Selection>,
    last_markup: Option<String>,
    last_classes: Vec<String>,
}

impl GenerationSession {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.last_selection.as_ref()
    }

    pub fn last_markup(&self) -> Option<&str> {
        self.last_markup.as_deref()
    }

    pub fn last_classes(&self) -> &[String] {
        &self.last_classes
    }

    /// Start working on a new selection
    pub fn load_selection(&mut self, selection: Selection) {
        info!(nodes = selection.node_count(), "Loaded selection");
        self.last_selection = Some(selection);
        self.last_markup = None;
        self.last_classes.clear();
    }

    fn require_selection(&self) -> PromptResult<&Selection> {
        self.last_selection.as_ref().ok_or(PromptError::MissingSelection)
    }

    /// Structural analysis of the loaded selection
    pub fn analysis(&self) -> PromptResult<AnalysisResult> {
        Ok(analyze_selection(self.require_selection()?))
    }

    /// Markup prompt, limited to known stylesheet classes when there are any
    pub fn html_prompt(&self, user_prompt: &str) -> PromptResult<String> {
        let selection = self.require_selection()?;
        if self.last_classes.is_empty() {
            Ok(html_prompt(selection, user_prompt))
        } else {
            debug!(classes = self.last_classes.len(), "Constraining markup to known classes");
            Ok(html_prompt_with_classes(selection, user_prompt, &self.last_classes))
        }
    }

    /// Normalize a markup response and remember it
    pub fn accept_html(&mut self, response: &str) -> String {
        let mut code = normalize_html(&extract_code_block(response));

        if self.options.enforce_wrapper_class {
            if let Some(wrapper) = pick_wrapper_class(&self.last_classes) {
                code = ensure_wrapper_class(&code, wrapper);
            }
        }

        self.last_markup = Some(code.clone());
        code
    }

    /// Stylesheet prompt, built on the last markup when there is one
    pub fn scss_prompt(&self, user_prompt: &str) -> PromptResult<String> {
        let selection = self.require_selection()?;
        match self.last_markup.as_deref() {
            Some(markup) if !markup.trim().is_empty() => {
                Ok(scss_prompt_from_markup(markup, selection, user_prompt))
            }
            _ => Ok(scss_prompt(selection, user_prompt)),
        }
    }

    /// Stylesheet prompt for markup supplied by the caller
    pub fn scss_prompt_for_markup(&self, markup: &str, user_prompt: &str) -> PromptResult<String> {
        if markup.trim().is_empty() {
            return Err(PromptError::MissingMarkup);
        }
        let selection = self.require_selection()?;
        Ok(scss_prompt_from_markup(markup, selection, user_prompt))
    }

    /// Normalize a stylesheet response and remember its classes
    pub fn accept_scss(&mut self, response: &str) -> ScssOutcome {
        let code = normalize_scss_with(&extract_code_block(response), &self.options.scss);
        let classes = class_names_from_stylesheet(&code);
        let style_info = self
            .last_selection
            .as_ref()
            .map(extract_selection_style)
            .unwrap_or_default();

        info!(classes = classes.len(), "Accepted stylesheet");
        self.last_classes = classes.clone();

        ScssOutcome {
            code,
            classes,
            style_info,
        }
    }
}
