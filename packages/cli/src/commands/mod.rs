pub mod analyze;
pub mod classes;
pub mod lint_scss;
pub mod normalize;
pub mod prompt;
pub mod styles;

pub use analyze::{analyze, AnalyzeArgs};
pub use classes::{classes, ClassesArgs};
pub use lint_scss::{lint_scss, LintScssArgs};
pub use normalize::{normalize, NormalizeArgs};
pub use prompt::{prompt, PromptArgs};
pub use styles::{styles, StylesArgs};

use crate::config::Config;
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use handoff_common::{load_selection, read_source, STDIN_PATH};
use handoff_scene::Selection;
use std::path::Path;

/// State shared by every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: Config,
}

/// Kind of generated source a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Html,
    Scss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn describe(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read a file, or stdin for `-`
pub fn read_input(path: &Path) -> Result<String> {
    read_source(path).with_context(|| format!("Failed to read {}", describe(path)))
}

/// Read and parse an exported selection, or stdin for `-`
pub fn read_selection(path: &Path) -> Result<Selection> {
    load_selection(path).with_context(|| format!("Failed to load selection from {}", describe(path)))
}

/// Print text as-is, ending with exactly one trailing newline
pub fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
