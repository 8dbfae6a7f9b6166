//! Operator confirmation before committing.

use std::io::{self, BufRead, IsTerminal, Write};

use console::{Term, style};
use dialoguer::Input;

use crate::error::CommitError;

/// Asks the operator whether to go ahead with a commit.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmation {
    fn confirm(&self) -> Result<bool, CommitError>;
}

fn prompt_text() -> String {
    format!("Do you want to proceed {}", style("y/n").green())
}

/// Write the prompt to `writer` and read exactly one line from `reader`.
///
/// No re-prompt on invalid input. End of input counts as an empty answer.
pub fn confirm_from<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<bool, CommitError> {
    write!(writer, "{}: ", prompt_text()).map_err(CommitError::Output)?;
    writer.flush().map_err(CommitError::Output)?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .map_err(CommitError::Confirmation)?;

    Ok(is_affirmative(&answer))
}

/// Reads the answer from standard input, prompting on standard output.
///
/// An interactive terminal gets a dialoguer line editor drawn on stdout;
/// piped input is read as a plain line.
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self) -> Result<bool, CommitError> {
        let stdout = Term::stdout();
        if !io::stdin().is_terminal() || !stdout.is_term() {
            return confirm_from(io::stdin().lock(), io::stdout());
        }

        let answer: String = Input::new()
            .with_prompt(prompt_text())
            .allow_empty(true)
            .interact_text_on(&stdout)
            .map_err(|e| CommitError::Confirmation(io::Error::other(e)))?;

        Ok(is_affirmative(&answer))
    }
}

/// Only a lowercase `y` (surrounding whitespace ignored) counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim() == "y"
}
