//! Yes/no confirmation before files are rewritten.
//!
//! The orchestrator only sees the [`Confirmer`] trait, so the binary can prompt on
//! the terminal while tests hand in a fixed answer.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub trait Confirmer {
    /// Asks `question` and returns the answer. `default` is used when the user
    /// just presses enter or input is exhausted.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Always returns the same answer without asking. Backs `--yes`.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirmer for FixedAnswer {
    fn confirm(&mut self, _question: &str, _default: bool) -> Result<bool> {
        Ok(self.0)
    }
}

/// Prompts on a writer and reads one line of reply from a reader.
pub struct PromptConfirmer<R, W> {
    input: R,
    output: W,
}

impl PromptConfirmer<io::StdinLock<'static>, io::Stdout> {
    /// Prompts on stdout and reads the reply from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmer for PromptConfirmer<R, W> {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        write!(self.output, "{} {}: ", question, hint)?;
        self.output.flush()?;

        let mut reply = String::new();
        self.input
            .read_line(&mut reply)
            .context("Failed to read confirmation input.")?;
        // Keep the report on its own line when stdin is piped and nothing was echoed.
        if !reply.ends_with('\n') {
            writeln!(self.output)?;
        }
        Ok(parse_answer(&reply, default))
    }
}

/// Empty input means `default`; `y`/`yes` mean yes; anything else means no.
pub fn parse_answer(reply: &str, default: bool) -> bool {
    match reply.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(reply: &str) -> (bool, String) {
        let mut output = Vec::new();
        let answer = PromptConfirmer::new(reply.as_bytes(), &mut output)
            .confirm("Remove 2 console statement(s) from 1 file(s)?", true)
            .unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn enter_accepts_the_default() {
        let (answer, prompt) = ask("\n");
        assert!(answer);
        assert_eq!(prompt, "Remove 2 console statement(s) from 1 file(s)? (Y/n): ");
    }

    #[test]
    fn explicit_answers() {
        assert!(ask("y\n").0);
        assert!(ask("  YES \n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("nope\n").0);
    }

    #[test]
    fn end_of_input_means_default() {
        let (answer, prompt) = ask("");
        assert!(answer);
        assert!(prompt.ends_with("(Y/n): \n"));
    }

    #[test]
    fn fixed_answer_ignores_the_question() {
        assert!(!FixedAnswer(false).confirm("anything?", true).unwrap());
        assert!(FixedAnswer(true).confirm("anything?", false).unwrap());
    }

    #[test]
    fn parse_answer_default_no() {
        assert!(!parse_answer("", false));
        assert!(parse_answer("Y", false));
    }
}
