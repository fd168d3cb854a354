//! Interactive prompt: asks for origin, current line and destination on stdin,
//! then prints the blind and heuristic results side by side.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use metro_planner_lib::RouteRequest;

use super::compare::run_comparison;
use super::PlannerContext;

/// Arguments for the prompt command.
#[derive(Args, Debug, Clone)]
pub struct PromptCommandArgs {
    /// Also write an HTML report of both results to this file.
    #[arg(long)]
    pub html: Option<PathBuf>,
}

const QUESTIONS: [&str; 3] = ["Origin station", "Current line", "Destination station"];

/// Handle the prompt subcommand, reading answers from `input`.
pub fn handle_prompt_command<R: BufRead>(
    context: &PlannerContext,
    args: &PromptCommandArgs,
    mut input: R,
) -> Result<()> {
    let [origin, line, destination] = read_answers(&mut input, &mut io::stderr())?;
    let request =
        RouteRequest::heuristic(&origin, &line, &destination).with_limits(context.limits);
    tracing::debug!(
        origin = %request.origin,
        line = %request.origin_line,
        destination = %request.destination,
        "read prompt answers"
    );
    run_comparison(context, &request, args.html.as_deref())
}

/// Ask each question on `prompts` and read one answer line per question.
pub fn read_answers<R: BufRead, W: Write>(input: &mut R, prompts: &mut W) -> Result<[String; 3]> {
    let mut answers: [String; 3] = Default::default();
    for (question, answer) in QUESTIONS.iter().zip(answers.iter_mut()) {
        write!(prompts, "{question}: ")?;
        prompts.flush()?;

        let read = input
            .read_line(answer)
            .with_context(|| format!("failed to read {}", question.to_lowercase()))?;
        if read == 0 {
            bail!("input ended before {} was given", question.to_lowercase());
        }
        *answer = answer.trim().to_string();
        if answer.is_empty() {
            bail!("{} must not be empty", question.to_lowercase());
        }
    }
    Ok(answers)
}
