//! Interactive confirmation on stdin
//!
//! A terminal gets a dialoguer text prompt. Piped stdin is read line by line
//! so answers can be scripted.

use std::io::{self, IsTerminal};

use dialoguer::Input;
use skillset_core::{LinePrompter, Prompter};

/// [`Prompter`] bound to the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        if !io::stdin().is_terminal() {
            return LinePrompter::new(io::stdin().lock(), io::stdout()).ask(question);
        }

        Input::<String>::new()
            .with_prompt(format!("{question} [Y/n]"))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}
