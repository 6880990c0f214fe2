//! Terminal rendering of styled output
//!
//! Maps [`Style`] onto `colored` styles. `colored` already honours `NO_COLOR`
//! and drops escape codes when stdout is not a terminal.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use skillset_core::{Style, StyledWriter};

/// [`StyledWriter`] that colors text for a terminal.
#[derive(Debug)]
pub struct ColoredWriter<W: Write> {
    inner: W,
}

impl ColoredWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { inner: io::stdout() }
    }
}

fn paint(style: Style, text: &str) -> ColoredString {
    match style {
        Style::Plain => text.normal(),
        Style::Heading => text.blue().bold(),
        Style::Name => text.cyan().bold(),
        Style::Added => text.green(),
        Style::Removed => text.red(),
        Style::Changed => text.yellow(),
        Style::Muted => text.dimmed(),
        Style::Success => text.green().bold(),
        Style::Warning => text.yellow().bold(),
        Style::Error => text.red().bold(),
    }
}

impl<W: Write> StyledWriter for ColoredWriter<W> {
    fn write_styled(&mut self, style: Style, text: &str) -> io::Result<()> {
        write!(self.inner, "{}", paint(style, text))
    }

    fn end_line(&mut self) -> io::Result<()> {
        writeln!(self.inner)?;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_survives_painting() {
        colored::control::set_override(false);
        let mut writer = ColoredWriter { inner: Vec::new() };
        writer.write_styled(Style::Added, "+ SKILL.md").unwrap();
        writer.end_line().unwrap();
        assert_eq!(String::from_utf8(writer.inner).unwrap(), "+ SKILL.md\n");
    }
}
