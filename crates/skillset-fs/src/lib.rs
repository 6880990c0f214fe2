//! Filesystem layer for the skillset installer
//!
//! Provides separator-independent relative paths, recursive tree listing,
//! and the remove/copy primitives used to replace an installed package.

pub mod error;
pub mod io;
pub mod path;
pub mod tree;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use tree::{RelativeFileSet, list_files};
