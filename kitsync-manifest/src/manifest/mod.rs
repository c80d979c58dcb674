//! Manifest types and parsing for kitsync.toml files.

mod file;
mod parse;

use std::path::{Path, PathBuf};

pub use file::KitsyncToml;
use indexmap::IndexMap;
use serde::Deserialize;

/// Root manifest for kitsync.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project layout conventions
    #[serde(default)]
    pub kit: Layout,
}

/// Project layout conventions, all paths relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Directory the generated tsconfig.json is written to
    pub out_dir: PathBuf,

    /// Build tool config file that the generated config type-checks
    pub config_file: PathBuf,

    /// Conventional source locations
    pub files: LayoutFiles,

    /// Import aliases, in declaration order
    pub alias: IndexMap<String, String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(".svelte-kit"),
            config_file: PathBuf::from("svelte.config.js"),
            files: LayoutFiles::default(),
            alias: IndexMap::new(),
        }
    }
}

impl Layout {
    /// The library directory under `root`, if it exists on disk.
    ///
    /// The returned path is the configured one, not joined to `root`.
    pub fn existing_lib_dir(&self, root: &Path) -> Option<&Path> {
        root.join(&self.files.lib)
            .exists()
            .then_some(self.files.lib.as_path())
    }
}

/// Conventional source locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutFiles {
    /// Route modules
    pub routes: PathBuf,

    /// Library modules, exposed as `$lib`
    pub lib: PathBuf,

    /// Service worker entry point, with or without extension
    pub service_worker: PathBuf,
}

impl Default for LayoutFiles {
    fn default() -> Self {
        Self {
            routes: PathBuf::from("src/routes"),
            lib: PathBuf::from("src/lib"),
            service_worker: PathBuf::from("src/service-worker"),
        }
    }
}
