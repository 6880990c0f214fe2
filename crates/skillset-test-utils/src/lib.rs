//! Shared test utilities for the skillset workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication across
//! crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`tree::TestTree`] builder for source/destination skill trees

pub mod tree;

pub use tree::TestTree;
