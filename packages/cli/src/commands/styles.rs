use super::{read_selection, Context};
use anyhow::Result;
use clap::Args;
use handoff_analyzer::extract_selection_style;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Exported selection JSON (`-` for stdin)
    pub input: PathBuf,
}

pub fn styles(args: StylesArgs, _ctx: &Context) -> Result<ExitCode> {
    let selection = read_selection(&args.input)?;
    let info = extract_selection_style(&selection);
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(ExitCode::SUCCESS)
}
