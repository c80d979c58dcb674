//! Core utilities and types for kitsync.
//!
//! This crate provides the file writing and path handling primitives shared
//! by the rest of the kitsync workspace.

mod file;
mod paths;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Path utilities
pub use paths::{normalize, posixify, project_relative, relative};
