//! Error types for skillset-core

use std::path::PathBuf;

/// Result type for skillset-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Step of a package sync that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep {
    /// Listing the source or installed tree
    List,
    /// Removing the installed package subtree
    Remove,
    /// Copying the source package subtree into place
    Copy,
}

impl std::fmt::Display for SyncStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::List => "list",
            Self::Remove => "remove",
            Self::Copy => "copy",
        };
        write!(f, "{s}")
    }
}

/// Errors that can occur in skillset-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source skills directory is missing
    #[error("Source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// No destination override and no home directory to default to
    #[error("Cannot determine home directory; set SKILLS_DEST_DIR or pass --dest")]
    NoHomeDir,

    /// The running program's own path could not be determined
    #[error("Cannot locate the running program: {0}")]
    ProgramLocation(#[source] std::io::Error),

    /// A single package failed to sync
    #[error("{}", sync_message(.package, .step, .source))]
    Sync {
        package: String,
        step: SyncStep,
        #[source]
        source: skillset_fs::Error,
    },

    /// Reading the operator's answer failed
    #[error("Prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// Writing the report failed
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from skillset-fs
    #[error(transparent)]
    Fs(#[from] skillset_fs::Error),
}

fn sync_message(package: &str, step: &SyncStep, source: &skillset_fs::Error) -> String {
    match step {
        SyncStep::Copy => format!(
            "Failed to copy skill '{package}': {source} (the installed copy may be incomplete; re-run to repair it)"
        ),
        _ => format!("Failed to {step} skill '{package}': {source}"),
    }
}

impl Error {
    /// Wrap a filesystem error as a failure of one package step.
    pub fn sync(package: impl Into<String>, step: SyncStep, source: skillset_fs::Error) -> Self {
        Self::Sync {
            package: package.into(),
            step,
            source,
        }
    }
}
