//! Installer orchestration
//!
//! Drives every package through list → diff → report → confirm → apply and
//! tallies the outcomes. Packages are independent: an I/O failure in one is
//! reported and counted, and the run moves on to the next.

use tracing::{debug, info, warn};

use skillset_fs::{io as fs_io, list_files};

use crate::confirm::{ConfirmationGate, Prompter};
use crate::diff::diff;
use crate::error::SyncStep;
use crate::executor::{Applied, SyncExecutor};
use crate::mode::{Action, OperatingMode};
use crate::package::discover_packages;
use crate::paths::Roots;
use crate::report::{PackageDirs, ReportPresenter, Style, StyledWriter};
use crate::summary::{Outcome, RunSummary};
use crate::{Error, Result};

/// One installer run over every package in the source root.
pub struct Installer<P, W> {
    roots: Roots,
    mode: OperatingMode,
    gate: ConfirmationGate<P>,
    out: W,
}

impl<P: Prompter, W: StyledWriter> Installer<P, W> {
    pub fn new(roots: Roots, mode: OperatingMode, prompter: P, out: W) -> Self {
        Self {
            roots,
            mode,
            gate: ConfirmationGate::new(prompter),
            out,
        }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Process all packages in alphabetical order and print the summary.
    ///
    /// # Errors
    ///
    /// Only run-level problems are returned: the destination root cannot be
    /// created, the source root cannot be listed, a prompt or the output
    /// fails. Per-package I/O failures are counted in the summary instead.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.header()?;
        self.prepare_dest()?;

        let packages = discover_packages(&self.roots.source)?;
        let mut summary = RunSummary::new();

        if packages.is_empty() {
            self.line(
                Style::Warning,
                &format!("No skills found in {}", self.roots.source.display()),
            )?;
        }

        for package in &packages {
            self.line(Style::Plain, "")?;
            let outcome = self.process(package)?;
            debug!(package = %package, ?outcome, "package processed");
            summary.record(outcome);
        }

        self.footer(&summary)?;
        info!(
            total = summary.total(),
            failed = summary.failed,
            dry_run = self.mode.dry_run,
            "run finished"
        );
        Ok(summary)
    }

    fn header(&mut self) -> Result<()> {
        let verb = if self.mode.dry_run {
            "Previewing skills"
        } else {
            "Installing skills"
        };
        let source = self.roots.source.display().to_string();
        let dest = self.roots.dest.display().to_string();
        self.write(Style::Heading, "=> ")?;
        self.write(Style::Plain, &format!("{verb} from "))?;
        self.write(Style::Name, &source)?;
        self.write(Style::Plain, " to ")?;
        self.write(Style::Name, &dest)?;
        self.out.end_line().map_err(Error::Output)
    }

    fn prepare_dest(&mut self) -> Result<()> {
        if self.roots.dest.is_dir() {
            return Ok(());
        }

        if self.mode.dry_run {
            let msg = format!(
                "[dry-run] Would create destination directory {}",
                self.roots.dest.display()
            );
            return self.line(Style::Muted, &msg);
        }

        fs_io::ensure_dir(&self.roots.dest)?;
        if self.mode.verbose {
            let msg = format!("Created destination directory {}", self.roots.dest.display());
            self.line(Style::Muted, &msg)?;
        }
        Ok(())
    }

    fn process(&mut self, package: &str) -> Result<Outcome> {
        let old_dir = self.roots.dest_package(package);
        let new_dir = self.roots.source_package(package);
        let action = if fs_io::entry_exists(&old_dir) {
            Action::Update
        } else {
            Action::Install
        };

        let listed = list_files(&old_dir).and_then(|old| Ok((old, list_files(&new_dir)?)));
        let (old, new) = match listed {
            Ok(sets) => sets,
            Err(e) => return self.fail(Error::sync(package, SyncStep::List, e)),
        };

        let result = diff(&old, &new);
        debug!(package, changes = result.len(), "diff computed");
        let dirs = PackageDirs {
            old: &old_dir,
            new: &new_dir,
        };
        ReportPresenter::new(self.mode)
            .present(&mut self.out, package, action, &result, dirs)
            .map_err(Error::Output)?;

        if !self.gate.should_proceed(&self.mode, action, package)? {
            self.line(Style::Warning, &format!("   Skipped {package}"))?;
            return Ok(Outcome::Skipped);
        }

        match SyncExecutor::new(self.mode).apply(&mut self.out, package, &self.roots) {
            Ok(applied) => {
                self.applied(package, applied)?;
                Ok(applied.into())
            }
            Err(e @ Error::Sync { .. }) => self.fail(e),
            Err(e) => Err(e),
        }
    }

    fn applied(&mut self, package: &str, applied: Applied) -> Result<()> {
        let msg = match (self.mode.dry_run, applied) {
            (true, Applied::Installed) => format!("   Would install {package}"),
            (true, Applied::Updated) => format!("   Would update {package}"),
            (false, Applied::Installed) => format!("   Installed {package}"),
            (false, Applied::Updated) => format!("   Updated {package}"),
        };
        self.line(Style::Success, &msg)
    }

    fn fail(&mut self, err: Error) -> Result<Outcome> {
        warn!(error = %err, "package failed");
        self.line(Style::Error, &format!("   ERROR {err}"))?;
        Ok(Outcome::Failed)
    }

    fn footer(&mut self, summary: &RunSummary) -> Result<()> {
        self.line(Style::Plain, "")?;
        let title = if self.mode.dry_run {
            "Summary (dry run, nothing changed):"
        } else {
            "Summary:"
        };
        self.write(Style::Heading, "=> ")?;
        self.line(Style::Plain, title)?;

        for row in summary.render(&self.mode).lines() {
            let style = if row.starts_with("failed") {
                Style::Error
            } else {
                Style::Plain
            };
            self.line(style, &format!("   {row}"))?;
        }
        Ok(())
    }

    fn write(&mut self, style: Style, text: &str) -> Result<()> {
        self.out.write_styled(style, text).map_err(Error::Output)
    }

    fn line(&mut self, style: Style, text: &str) -> Result<()> {
        self.out.line(style, text).map_err(Error::Output)
    }
}

impl<P, W: std::fmt::Debug> std::fmt::Debug for Installer<P, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Installer")
            .field("roots", &self.roots)
            .field("mode", &self.mode)
            .field("out", &self.out)
            .finish_non_exhaustive()
    }
}
