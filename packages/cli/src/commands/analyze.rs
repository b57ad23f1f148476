use super::{print_text, read_selection, Context, OutputFormat};
use anyhow::Result;
use clap::Args;
use handoff_analyzer::analyze_selection;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Exported selection JSON (`-` for stdin)
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn analyze(args: AnalyzeArgs, _ctx: &Context) -> Result<ExitCode> {
    let selection = read_selection(&args.input)?;
    let result = analyze_selection(&selection);

    match args.format {
        OutputFormat::Text => print_text(&result.recommended_structure),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(ExitCode::SUCCESS)
}
