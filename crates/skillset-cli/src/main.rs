//! Skill installer CLI
//!
//! Copies every skill package shipped beside this program into the user's
//! skills directory, previewing per-file changes and asking before each one.

mod cli;
mod error;
mod logging;
mod output;
mod prompt;

use clap::Parser;
use colored::Colorize;

use skillset_core::{Installer, PathResolver};

use cli::Cli;
use error::{CliError, Result};
use output::ColoredWriter;
use prompt::TerminalPrompter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Invalid arguments, --help and --version exit inside parse
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mode = cli.mode();
    tracing::debug!(?mode, "starting run");

    let roots = PathResolver::new()
        .with_source(cli.source.clone())
        .with_dest(cli.dest.clone())
        .resolve()?;

    let mut installer = Installer::new(roots, mode, TerminalPrompter, ColoredWriter::stdout());
    let summary = installer.run()?;

    if cli.strict && summary.has_failures() {
        return Err(CliError::user(format!(
            "{} skill(s) failed to install",
            summary.failed
        )));
    }

    Ok(())
}
