//! Per-package confirmation
//!
//! Answers default to yes. Only an explicit `n`/`no` (any case) declines a
//! package, so a run can be accepted by holding Enter.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::mode::{Action, OperatingMode};
use crate::{Error, Result};

/// Source of free-text answers to a yes/no question.
pub trait Prompter {
    /// Show `question` and block until the operator answers.
    ///
    /// End of input is returned as an empty answer.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

impl<T: Prompter + ?Sized> Prompter for &mut T {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        (**self).ask(question)
    }
}

/// [`Prompter`] reading one line per question from any buffered reader.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question} [Y/n] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Whether `answer` explicitly declines.
pub fn is_negative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no")
}

/// The prompt shown before applying `action` to `package`.
pub fn question(action: Action, package: &str) -> String {
    format!("{} skill '{package}'?", capitalize(action.as_str()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decides whether each package proceeds.
#[derive(Debug)]
pub struct ConfirmationGate<P> {
    prompter: P,
}

impl<P: Prompter> ConfirmationGate<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Dry-run and auto-confirm proceed without asking; otherwise the operator
    /// is asked and anything but an explicit no proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Prompt`] if the answer cannot be read.
    pub fn should_proceed(
        &mut self,
        mode: &OperatingMode,
        action: Action,
        package: &str,
    ) -> Result<bool> {
        if mode.confirms_implicitly() {
            return Ok(true);
        }

        let answer = self
            .prompter
            .ask(&question(action, package))
            .map_err(Error::Prompt)?;
        let proceed = !is_negative(&answer);
        debug!(package, answer = %answer, proceed, "confirmation answered");
        Ok(proceed)
    }
}
