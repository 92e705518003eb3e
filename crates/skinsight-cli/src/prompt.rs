//! Terminal input for the questionnaire.

use std::io::{BufRead, Write};

use skinsight_core::FinalResult;
use skinsight_engine::{Session, Step};
use skinsight_knowledge::bank::Question;

/// What the user typed at a question prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer with this option text.
    Answer(String),
    Back,
    Finish,
}

/// Interpret one line of input for `question`.
///
/// Accepts `y`/`yes`, `n`/`no`, an option number, or an option's full
/// text (any case), plus `b`/`back` and `f`/`finish`. Returns `None` for
/// anything else so the caller can re-prompt.
pub fn parse(input: &str, question: &Question) -> Option<Command> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => None,
        "y" | "yes" => Some(Command::Answer(question.affirmative().to_string())),
        "n" | "no" => Some(Command::Answer(question.negative().to_string())),
        "b" | "back" => Some(Command::Back),
        "f" | "finish" => Some(Command::Finish),
        other => {
            if let Ok(n) = other.parse::<usize>() {
                return n
                    .checked_sub(1)
                    .and_then(|i| question.options.get(i))
                    .map(|o| Command::Answer(o.clone()));
            }
            question
                .options
                .iter()
                .find(|o| o.to_lowercase() == other)
                .map(|o| Command::Answer(o.clone()))
        }
    }
}

/// The prompt line shown for the `position`-th question asked.
pub fn render(question: &Question, position: usize) -> String {
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("[{}] {o}", i + 1))
        .collect::<Vec<_>>()
        .join("  ");
    format!("Q{position}. {}\n    {options}  (b = back, f = finish)", question.text)
}

/// Drive `session` from line-based `input`, writing prompts to `prompts`.
///
/// End of input finishes the session with the answers given so far.
pub fn run_questionnaire<R, W>(
    session: &mut Session,
    input: R,
    prompts: &mut W,
) -> eyre::Result<FinalResult>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut step = session.start()?;
    loop {
        let question = match step {
            Step::Complete { result } => return Ok(*result),
            Step::Ask { question } => question,
        };
        writeln!(prompts, "\n{}", render(&question, session.history().len()))?;
        write!(prompts, "> ")?;
        prompts.flush()?;

        let Some(line) = lines.next() else {
            tracing::info!(session_id = %session.id(), "input closed, finishing early");
            return Ok(session.finish()?);
        };
        let line = line?;

        step = match parse(&line, &question) {
            Some(Command::Answer(text)) => session.answer(question.id, &text)?,
            Some(Command::Finish) => return Ok(session.finish()?),
            Some(Command::Back) => match session.previous() {
                Ok(earlier) => Step::Ask {
                    question: earlier.clone(),
                },
                Err(e) => {
                    writeln!(prompts, "{e}")?;
                    Step::Ask { question }
                }
            },
            None => {
                writeln!(prompts, "Please answer y or n.")?;
                Step::Ask { question }
            }
        };
    }
}
