use super::{read_input, read_selection, Context, Language};
use anyhow::Result;
use clap::Args;
use handoff_prompt::GenerationSession;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Which generation round to build the prompt for
    #[arg(value_enum)]
    pub language: Language,

    /// Exported selection JSON (`-` for stdin)
    pub input: PathBuf,

    /// Accepted markup to style (scss prompts only)
    #[arg(long)]
    pub markup: Option<PathBuf>,

    /// Stylesheet whose classes the markup must use (html prompts only)
    #[arg(long)]
    pub classes: Option<PathBuf>,

    /// Request text placed at the top of the prompt
    #[arg(short, long, default_value = "")]
    pub user_prompt: String,
}

pub fn build_prompt(args: &PromptArgs, session: &mut GenerationSession) -> Result<String> {
    let selection = read_selection(&args.input)?;
    session.load_selection(selection);

    let prompt = match args.language {
        Language::Html => {
            if args.markup.is_some() {
                warn!("--markup only applies to scss prompts, ignoring it");
            }
            if let Some(path) = &args.classes {
                let stylesheet = read_input(path)?;
                session.accept_scss(&stylesheet);
            }
            session.html_prompt(&args.user_prompt)?
        }
        Language::Scss => {
            if args.classes.is_some() {
                warn!("--classes only applies to html prompts, ignoring it");
            }
            match &args.markup {
                Some(path) => {
                    let markup = read_input(path)?;
                    session.scss_prompt_for_markup(&markup, &args.user_prompt)?
                }
                None => session.scss_prompt(&args.user_prompt)?,
            }
        }
    };

    Ok(prompt)
}

pub fn prompt(args: PromptArgs, ctx: &Context) -> Result<ExitCode> {
    let mut session = GenerationSession::new(ctx.config.normalize_options());
    let prompt = build_prompt(&args, &mut session)?;
    println!("{}", prompt);
    Ok(ExitCode::SUCCESS)
}
