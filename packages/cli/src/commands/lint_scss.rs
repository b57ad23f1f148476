use super::{read_input, Context, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use handoff_normalizer::lint_nesting;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct LintScssArgs {
    /// Stylesheet to check (`-` for stdin)
    pub input: PathBuf,

    /// Nesting limit (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn lint_scss(args: LintScssArgs, ctx: &Context) -> Result<ExitCode> {
    let source = read_input(&args.input)?;
    let max_depth = args.max_depth.unwrap_or(ctx.config.max_nesting_depth);
    let diagnostics = lint_nesting(&source, max_depth);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                println!("{} No issues found!", "✓".green());
            } else {
                println!("{}", args.input.display());
            }

            for diagnostic in &diagnostics {
                println!(
                    "  {} [{}] line {}: {}",
                    "warning".yellow().bold(),
                    diagnostic.rule,
                    diagnostic.line,
                    diagnostic.message
                );

                if let Some(suggestion) = &diagnostic.suggestion {
                    println!("    {} {}", "hint:".dimmed(), suggestion.dimmed());
                }
            }
        }
    }

    if diagnostics.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
