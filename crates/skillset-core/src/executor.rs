//! Package application
//!
//! A package is replaced wholesale: the installed subtree is removed, then the
//! source subtree is copied in. Files that disappeared from the source vanish
//! with the removal, so no per-file deletion happens. Between the two steps
//! the package is absent, and a failed copy leaves it partially installed.
//! The source is checked first so a vanished source never costs the
//! installed copy.

use tracing::{debug, info};

use skillset_fs::io as fs_io;

use crate::error::SyncStep;
use crate::mode::OperatingMode;
use crate::paths::Roots;
use crate::report::{Style, StyledWriter};
use crate::{Error, Result};

/// What a successful apply did (or, in a dry run, would do).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Installed,
    Updated,
}

/// Performs the remove-then-copy for one package.
#[derive(Debug, Clone, Copy)]
pub struct SyncExecutor {
    mode: OperatingMode,
}

impl SyncExecutor {
    pub fn new(mode: OperatingMode) -> Self {
        Self { mode }
    }

    /// Replace `roots.dest/<package>` with a copy of `roots.source/<package>`.
    ///
    /// In a dry run nothing is touched; the steps are reported and the
    /// outcome that a real run would have is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::Sync`] at the list step when the source package is no longer
    ///   a directory; the installed package is not touched
    /// - [`Error::Sync`] when the removal or the copy fails
    /// - [`Error::Output`] when progress cannot be written
    pub fn apply(
        &self,
        out: &mut dyn StyledWriter,
        package: &str,
        roots: &Roots,
    ) -> Result<Applied> {
        let src = roots.source_package(package);
        let dest = roots.dest_package(package);
        fs_io::require_dir(&src).map_err(|e| Error::sync(package, SyncStep::List, e))?;

        // A dangling link still occupies the slot and must be cleared
        let installed = fs_io::entry_exists(&dest);
        let applied = if installed {
            Applied::Updated
        } else {
            Applied::Installed
        };

        if self.mode.dry_run {
            if installed {
                out.line(Style::Muted, &format!("   [dry-run] Would remove {}", dest.display()))
                    .map_err(Error::Output)?;
            }
            out.line(
                Style::Muted,
                &format!("   [dry-run] Would copy {} -> {}", src.display(), dest.display()),
            )
            .map_err(Error::Output)?;
            debug!(package, ?applied, "dry run, filesystem untouched");
            return Ok(applied);
        }

        if installed {
            if self.mode.verbose {
                out.line(Style::Muted, &format!("   Removing {}", dest.display()))
                    .map_err(Error::Output)?;
            }
            fs_io::remove_tree(&dest).map_err(|e| Error::sync(package, SyncStep::Remove, e))?;
        }

        if self.mode.verbose {
            out.line(
                Style::Muted,
                &format!("   Copying {} -> {}", src.display(), dest.display()),
            )
            .map_err(Error::Output)?;
        }
        let copied =
            fs_io::copy_tree(&src, &dest).map_err(|e| Error::sync(package, SyncStep::Copy, e))?;

        if self.mode.verbose {
            out.line(Style::Muted, &format!("   Copied {copied} file(s)"))
                .map_err(Error::Output)?;
        }
        info!(package, ?applied, copied, "package applied");
        Ok(applied)
    }
}
