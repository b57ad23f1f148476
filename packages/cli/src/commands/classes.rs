use super::{read_input, Context, Language};
use anyhow::Result;
use clap::Args;
use handoff_normalizer::{class_names_from_markup, class_names_from_stylesheet};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct ClassesArgs {
    /// Whether the input is markup or a stylesheet
    #[arg(value_enum)]
    pub language: Language,

    /// Source file (`-` for stdin)
    pub input: PathBuf,
}

pub fn classes(args: ClassesArgs, _ctx: &Context) -> Result<ExitCode> {
    let source = read_input(&args.input)?;
    let names = match args.language {
        Language::Html => class_names_from_markup(&source),
        Language::Scss => class_names_from_stylesheet(&source),
    };

    for name in names {
        println!("{}", name);
    }

    Ok(ExitCode::SUCCESS)
}
