mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    analyze, classes, lint_scss, normalize, prompt, styles, AnalyzeArgs, ClassesArgs, Context,
    LintScssArgs, NormalizeArgs, PromptArgs, StylesArgs,
};
use config::Config;
use std::path::PathBuf;
use std::process::ExitCode;

/// Handoff CLI - turn design selections into markup and stylesheet prompts
#[derive(Parser, Debug)]
#[command(name = "handoff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./handoff.config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend an HTML structure for an exported selection
    Analyze(AnalyzeArgs),

    /// Collect colors, fonts, sizes and positions from an exported selection
    Styles(StylesArgs),

    /// Rewrite generated markup or stylesheets to the house rules
    Normalize(NormalizeArgs),

    /// List the class names used by markup or defined by a stylesheet
    Classes(ClassesArgs),

    /// Report stylesheet lines nested too deeply
    LintScss(LintScssArgs),

    /// Assemble a generation prompt for an exported selection
    Prompt(PromptArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd, cli.config.as_deref())?;
    let ctx = Context { config };

    match cli.command {
        Command::Analyze(args) => analyze(args, &ctx),
        Command::Styles(args) => styles(args, &ctx),
        Command::Normalize(args) => normalize(args, &ctx),
        Command::Classes(args) => classes(args, &ctx),
        Command::LintScss(args) => lint_scss(args, &ctx),
        Command::Prompt(args) => prompt(args, &ctx),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!();
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "handoff",
            "normalize",
            "scss",
            "styles.scss",
            "--check",
            "--verbose",
            "--config",
            "custom.json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
        assert!(matches!(cli.command, Command::Normalize(ref args) if args.check));
    }

    #[test]
    fn test_lint_scss_subcommand_name() {
        let cli = Cli::try_parse_from(["handoff", "lint-scss", "-"]).unwrap();
        assert!(matches!(cli.command, Command::LintScss(_)));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["handoff", "classes", "css", "a.css"]).is_err());
    }
}
