//! tsconfig generation and reconciliation for kitsync.
//!
//! # Module Organization
//!
//! - [`alias`] - Alias declarations to `compilerOptions.paths` translation
//! - [`tsconfig`] - The generated tsconfig.json document and its file
//! - [`reconcile`] - Drift detection against the user's own config
//! - [`generator`] - Ties the pieces together for one project root

pub mod alias;
pub mod generator;
pub mod paths;
pub mod reconcile;
pub mod tsconfig;

pub use alias::{AliasSet, PathMapping, map_aliases};
pub use generator::{GenerationResult, Generator, PreviewFile, Validation};
pub use reconcile::{Warning, validate, validate_file};
pub use tsconfig::{CompilerOptions, GeneratedConfig, TsConfigFile};
