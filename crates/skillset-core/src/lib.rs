//! Core pipeline for the skillset installer
//!
//! Copies skill packages (named directories) from a bundled source tree into
//! a destination tree, showing per-file changes first:
//!
//! - **Path resolution**: source root beside the binary, destination under home
//! - **Diffing**: installed vs shipped file sets, split into delete/add/update
//! - **Reporting**: styled, optionally size-annotated change lists
//! - **Confirmation**: default-yes prompt, skipped under dry-run or auto-confirm
//! - **Apply**: remove-then-copy per package, nothing under dry-run
//!
//! # Architecture
//!
//! ```text
//!             skillset-cli
//!                  |
//!            skillset-core
//!                  |
//!             skillset-fs
//! ```

pub mod confirm;
pub mod diff;
pub mod error;
pub mod executor;
pub mod installer;
pub mod mode;
pub mod package;
pub mod paths;
pub mod report;
pub mod summary;

pub use confirm::{ConfirmationGate, LinePrompter, Prompter, is_negative};
pub use diff::{DiffResult, diff};
pub use error::{Error, Result, SyncStep};
pub use executor::{Applied, SyncExecutor};
pub use installer::Installer;
pub use mode::{Action, OperatingMode};
pub use package::discover_packages;
pub use paths::{DEST_ENV_VAR, PathResolver, Roots, SOURCE_ENV_VAR};
pub use report::{PackageDirs, PlainWriter, ReportPresenter, Style, StyledWriter};
pub use summary::{Outcome, RunSummary};
