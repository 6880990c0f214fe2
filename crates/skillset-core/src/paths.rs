//! Source and destination root resolution
//!
//! The source root is the `skills` directory shipped next to the installer
//! binary. The destination root defaults to `~/.claude/skills`. Either can be
//! overridden explicitly; the CLI feeds `--source`/`--dest` and their
//! environment fallbacks into [`PathResolver`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Name of the source directory expected beside the running program
pub const SOURCE_DIR_NAME: &str = "skills";

/// Environment variable overriding the destination root
pub const DEST_ENV_VAR: &str = "SKILLS_DEST_DIR";

/// Environment variable overriding the source root
pub const SOURCE_ENV_VAR: &str = "SKILLS_SOURCE_DIR";

/// Default destination root.
/// Returns: ~/.claude/skills/
pub fn default_dest_root() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".claude").join("skills"))
}

/// The two roots of a run. Resolved once, never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// Read-only tree holding every package
    pub source: PathBuf,
    /// Read-write tree packages are installed into
    pub dest: PathBuf,
}

impl Roots {
    /// Source directory of `package`.
    pub fn source_package(&self, package: &str) -> PathBuf {
        self.source.join(package)
    }

    /// Destination directory of `package`.
    pub fn dest_package(&self, package: &str) -> PathBuf {
        self.dest.join(package)
    }
}

/// Determines [`Roots`] from overrides, the program location and the platform.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    source_override: Option<PathBuf>,
    dest_override: Option<PathBuf>,
    program: Option<PathBuf>,
}

impl PathResolver {
    /// Resolver using the running program's location and the default
    /// destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `source` instead of the program-relative source root.
    pub fn with_source(mut self, source: Option<PathBuf>) -> Self {
        self.source_override = source;
        self
    }

    /// Use `dest` instead of the platform default.
    pub fn with_dest(mut self, dest: Option<PathBuf>) -> Self {
        self.dest_override = dest;
        self
    }

    /// Pretend the running program lives at `program`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Resolve both roots.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceNotFound`] if the source root is not a directory
    /// - [`Error::NoHomeDir`] if no destination was given and there is no home
    /// - [`Error::ProgramLocation`] if the program path cannot be determined
    pub fn resolve(&self) -> Result<Roots> {
        let source = match &self.source_override {
            Some(path) => absolute(path)?,
            None => self.program_dir()?.join(SOURCE_DIR_NAME),
        };
        if !source.is_dir() {
            return Err(Error::SourceNotFound { path: source });
        }

        let dest = match &self.dest_override {
            Some(path) => absolute(path)?,
            None => default_dest_root().ok_or(Error::NoHomeDir)?,
        };

        debug!(source = %source.display(), dest = %dest.display(), "resolved roots");
        Ok(Roots { source, dest })
    }

    fn program_dir(&self) -> Result<PathBuf> {
        let program = match &self.program {
            Some(path) => path.clone(),
            None => std::env::current_exe().map_err(Error::ProgramLocation)?,
        };
        // Resolve symlinked launchers to the real install location
        let program = dunce::canonicalize(&program).unwrap_or(program);

        program
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                Error::ProgramLocation(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} has no parent directory", program.display()),
                ))
            })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| skillset_fs::Error::io(path, e).into())
}
