use super::{print_text, read_input, Context, Language};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use handoff_normalizer::{normalize_html, normalize_scss_with};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Whether the input is markup or a stylesheet
    #[arg(value_enum)]
    pub language: Language,

    /// Source file (`-` for stdin)
    pub input: PathBuf,

    /// Print nothing and exit 1 when the input is not already normalized
    #[arg(long)]
    pub check: bool,
}

pub fn normalize_source(language: Language, source: &str, ctx: &Context) -> String {
    match language {
        Language::Html => normalize_html(source),
        Language::Scss => normalize_scss_with(source, &ctx.config.scss_options()),
    }
}

pub fn normalize(args: NormalizeArgs, ctx: &Context) -> Result<ExitCode> {
    let source = read_input(&args.input)?;
    let normalized = normalize_source(args.language, &source, ctx);

    if args.check {
        if normalized == source {
            debug!(input = %args.input.display(), "Already normalized");
            return Ok(ExitCode::SUCCESS);
        }
        eprintln!(
            "{} {} is not normalized",
            "✗".red(),
            args.input.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    print_text(&normalized);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_scss_uses_configured_depth() {
        let ctx = Context {
            config: Config {
                max_nesting_depth: 1,
                ..Config::default()
            },
        };
        let scss = ".a {\n  .b {\n    color: red;\n  }\n}";
        let normalized = normalize_source(Language::Scss, scss, &ctx);
        assert!(normalized.contains("nesting deeper than 1 levels"));

        let default = normalize_source(Language::Scss, scss, &Context::default());
        assert!(!default.contains("nesting deeper"));
    }

    #[test]
    fn test_html_is_normalized() {
        let html = normalize_source(Language::Html, r#"<div class="cardBody"></div>"#, &Context::default());
        assert_eq!(html, r#"<div class="card-body"></div>"#);
    }
}
