//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use skillset_core::{DEST_ENV_VAR, OperatingMode, SOURCE_ENV_VAR};

/// Install or update skill packages, showing what changes before applying it
#[derive(Parser, Debug)]
#[command(name = "install-skills")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip confirmation prompts and install every skill
    #[arg(short = 'y', long = "yes", visible_alias = "auto-confirm")]
    pub yes: bool,

    /// Show paths, file sizes, size changes and progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Directory to install skills into (default: ~/.claude/skills)
    #[arg(long, value_name = "DIR", env = DEST_ENV_VAR)]
    pub dest: Option<PathBuf>,

    /// Directory holding the skills to install (default: `skills` next to this program)
    #[arg(long, value_name = "DIR", env = SOURCE_ENV_VAR)]
    pub source: Option<PathBuf>,

    /// Exit with status 1 if any skill failed to install
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Flags for the run, resolved once.
    pub fn mode(&self) -> OperatingMode {
        OperatingMode::default()
            .with_auto_confirm(self.yes)
            .with_verbose(self.verbose)
            .with_dry_run(self.dry_run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn verify_cli() {
        // Verify the CLI is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["install-skills"]);
        assert!(!cli.yes && !cli.verbose && !cli.dry_run);
        assert!(!cli.strict);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from(["install-skills", "-y", "-v", "-n"]);
        let mode = cli.mode();
        assert!(mode.auto_confirm);
        assert!(mode.verbose);
        assert!(mode.dry_run);
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::parse_from(["install-skills", "--yes", "--verbose", "--dry-run", "--strict"]);
        assert!(cli.yes && cli.verbose && cli.dry_run && cli.strict);
    }

    #[test]
    fn parse_auto_confirm_alias() {
        let cli = Cli::parse_from(["install-skills", "--auto-confirm"]);
        assert!(cli.mode().auto_confirm);
    }

    #[test]
    fn parse_root_overrides() {
        let cli = Cli::parse_from([
            "install-skills",
            "--source",
            "/opt/skills",
            "--dest",
            "/tmp/installed",
        ]);
        assert_eq!(cli.source, Some(PathBuf::from("/opt/skills")));
        assert_eq!(cli.dest, Some(PathBuf::from("/tmp/installed")));
    }

    #[test]
    fn reject_unknown_flag() {
        let err = Cli::try_parse_from(["install-skills", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.to_string().contains("--bogus"));
    }

    #[test]
    fn reject_positional_argument() {
        let err = Cli::try_parse_from(["install-skills", "widgets"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.to_string().contains("widgets"));
    }

    #[test]
    fn help_is_displayed() {
        let err = Cli::try_parse_from(["install-skills", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
