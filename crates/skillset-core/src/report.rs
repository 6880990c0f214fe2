//! Diff rendering
//!
//! Everything the operator sees goes through [`StyledWriter`], which tags text
//! with a semantic [`Style`]. The CLI maps styles onto terminal colors;
//! [`PlainWriter`] drops them for files, pipes and tests.

use std::io::{self, Write};
use std::path::Path;

use skillset_fs::{NormalizedPath, RelativeFileSet, io as fs_io};

use crate::diff::DiffResult;
use crate::mode::{Action, OperatingMode};

/// Semantic role of a piece of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Section markers such as `=>`
    Heading,
    /// Names of packages and paths worth highlighting
    Name,
    /// Files being added
    Added,
    /// Files being removed
    Removed,
    /// Files being overwritten
    Changed,
    /// Secondary detail: sizes, paths, dry-run notes
    Muted,
    Success,
    Warning,
    Error,
}

/// Sink for styled output lines.
pub trait StyledWriter {
    /// Append `text` to the current line.
    fn write_styled(&mut self, style: Style, text: &str) -> io::Result<()>;

    /// Terminate the current line.
    fn end_line(&mut self) -> io::Result<()>;

    /// Write a whole line in a single style.
    fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        self.write_styled(style, text)?;
        self.end_line()
    }
}

impl<T: StyledWriter + ?Sized> StyledWriter for &mut T {
    fn write_styled(&mut self, style: Style, text: &str) -> io::Result<()> {
        (**self).write_styled(style, text)
    }

    fn end_line(&mut self) -> io::Result<()> {
        (**self).end_line()
    }
}

/// [`StyledWriter`] that ignores styles.
#[derive(Debug, Default)]
pub struct PlainWriter<W: Write> {
    inner: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl PlainWriter<Vec<u8>> {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner).into_owned()
    }
}

impl<W: Write> StyledWriter for PlainWriter<W> {
    fn write_styled(&mut self, _style: Style, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n")?;
        self.inner.flush()
    }
}

/// Where to look up file sizes for a package in verbose mode.
#[derive(Debug, Clone, Copy)]
pub struct PackageDirs<'a> {
    /// Installed package directory (may not exist)
    pub old: &'a Path,
    /// Source package directory
    pub new: &'a Path,
}

/// Format a byte count.
pub fn format_size(bytes: u64) -> String {
    format!("{bytes} bytes")
}

/// Signed size change `new - old`: `+4 bytes`, `-4 bytes` or `0 bytes`.
pub fn format_delta(old: u64, new: u64) -> String {
    let delta = i128::from(new) - i128::from(old);
    if delta > 0 {
        format!("+{delta} bytes")
    } else {
        format!("{delta} bytes")
    }
}

/// Renders a package's pending changes before anything is touched.
#[derive(Debug, Clone, Copy)]
pub struct ReportPresenter {
    mode: OperatingMode,
}

impl ReportPresenter {
    pub fn new(mode: OperatingMode) -> Self {
        Self { mode }
    }

    /// Print the header and file groups for one package.
    ///
    /// A new install lists every shipped file under "Files to install".
    /// An update lists delete, add and update groups in that order, leaving
    /// out empty groups. In verbose mode each file carries its size; sizes
    /// that cannot be read are left off rather than failing the report, and
    /// an updated file with one unreadable side shows only the other.
    pub fn present(
        &self,
        out: &mut dyn StyledWriter,
        package: &str,
        action: Action,
        diff: &DiffResult,
        dirs: PackageDirs<'_>,
    ) -> io::Result<()> {
        out.write_styled(Style::Heading, "=> ")?;
        out.write_styled(Style::Name, package)?;
        let label = match action {
            Action::Install => " (new install)",
            Action::Update => " (update)",
        };
        out.write_styled(Style::Muted, label)?;
        out.end_line()?;

        if self.mode.verbose {
            out.line(Style::Muted, &format!("   Source: {}", dirs.new.display()))?;
            out.line(Style::Muted, &format!("   Destination: {}", dirs.old.display()))?;
        }

        if diff.is_empty() {
            return out.line(Style::Muted, "   No files.");
        }

        match action {
            Action::Install => {
                // Everything shipped is new; group over the full source set
                let all: RelativeFileSet = diff
                    .to_add
                    .iter()
                    .chain(&diff.to_update)
                    .cloned()
                    .collect();
                self.group(out, "Files to install:", "+", Style::Added, &all, dirs.new)?;
            }
            Action::Update => {
                self.group(out, "Files to delete:", "-", Style::Removed, &diff.to_delete, dirs.old)?;
                self.group(out, "Files to add:", "+", Style::Added, &diff.to_add, dirs.new)?;
                self.update_group(out, &diff.to_update, dirs)?;
            }
        }

        Ok(())
    }

    fn group(
        &self,
        out: &mut dyn StyledWriter,
        title: &str,
        marker: &str,
        style: Style,
        files: &RelativeFileSet,
        side: &Path,
    ) -> io::Result<()> {
        if files.is_empty() {
            return Ok(());
        }

        out.line(Style::Plain, &format!("   {title}"))?;
        for file in files {
            self.entry_start(out, marker, style, file)?;
            if self.mode.verbose {
                if let Some(size) = fs_io::file_size(&file.under(side)) {
                    out.write_styled(Style::Muted, &format!(" ({})", format_size(size)))?;
                }
            }
            out.end_line()?;
        }
        Ok(())
    }

    fn update_group(
        &self,
        out: &mut dyn StyledWriter,
        files: &RelativeFileSet,
        dirs: PackageDirs<'_>,
    ) -> io::Result<()> {
        if files.is_empty() {
            return Ok(());
        }

        out.line(Style::Plain, "   Files to update:")?;
        for file in files {
            self.entry_start(out, "~", Style::Changed, file)?;
            if self.mode.verbose {
                let old = fs_io::file_size(&file.under(dirs.old));
                let new = fs_io::file_size(&file.under(dirs.new));
                let note = match (old, new) {
                    (Some(old), Some(new)) => Some(format!(
                        " - Old: {}, New: {} ({})",
                        format_size(old),
                        format_size(new),
                        format_delta(old, new)
                    )),
                    (Some(old), None) => Some(format!(" - Old: {}", format_size(old))),
                    (None, Some(new)) => Some(format!(" - New: {}", format_size(new))),
                    (None, None) => None,
                };
                if let Some(note) = note {
                    out.write_styled(Style::Muted, &note)?;
                }
            }
            out.end_line()?;
        }
        Ok(())
    }

    fn entry_start(
        &self,
        out: &mut dyn StyledWriter,
        marker: &str,
        style: Style,
        file: &NormalizedPath,
    ) -> io::Result<()> {
        out.write_styled(style, &format!("     {marker} "))?;
        out.write_styled(style, file.as_str())
    }
}
