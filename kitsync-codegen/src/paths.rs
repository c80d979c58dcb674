//! Path constants for the generated config.
//!
//! This module centralizes file names, globs, and fixed directories used by
//! the synthesizer and reconciler.

/// File name of the generated config inside the output directory.
pub const GENERATED_FILE: &str = "tsconfig.json";

/// Ambient declarations file, relative to the output directory.
pub const AMBIENT_FILE: &str = "ambient.d.ts";

/// Generated route types, relative to the output directory.
pub const TYPES_GLOB: &str = "./types/**/$types.d.ts";

/// Ambient type output directory, relative to the output directory.
pub const TYPES_DIR: &str = "./types";

/// Excludes everything in the output directory but the ambient declarations.
pub const LOCAL_EXCLUDE: &str = "./[!ambient.d.ts]**";

/// Dependency directory glob, relative to the project root.
pub const NODE_MODULES_GLOB: &str = "node_modules/**";

/// Top-level test directory. Not configurable.
pub const TESTS_DIR: &str = "tests";

/// Alias injected for the library directory.
pub const LIB_ALIAS: &str = "$lib";

/// Source file extensions type-checked under each source directory.
pub const SOURCE_EXTENSIONS: [&str; 3] = ["js", "ts", "svelte"];

/// Extensions tried for a service worker declared without one.
pub const SERVICE_WORKER_EXTENSIONS: [&str; 3] = ["js", "ts", "d.ts"];
