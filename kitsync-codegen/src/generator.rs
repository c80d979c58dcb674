//! Generation for one project root.

use std::path::{Path, PathBuf};

use eyre::Result;
use kitsync_core::{GeneratedFile, Overwrite, WriteResult, normalize};
use kitsync_manifest::{Layout, UserConfig};

use crate::{
    alias::{AliasSet, PathMapping, map_aliases},
    paths::GENERATED_FILE,
    reconcile::{self, Warning},
    tsconfig::{GeneratedConfig, TsConfigFile},
};

/// A file that would be generated.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// Result of writing the generated config.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Absolute path of the generated config.
    pub path: PathBuf,
    pub write: WriteResult,
}

/// Result of reconciling the user config.
#[derive(Debug, Clone)]
pub struct Validation {
    /// The user config that was checked.
    pub user_config: PathBuf,
    pub warnings: Vec<Warning>,
}

/// Generates and reconciles the tsconfig for a project.
///
/// Every call recomputes from the layout and the filesystem; nothing is
/// cached between calls.
pub struct Generator<'a> {
    root: PathBuf,
    layout: &'a Layout,
}

impl<'a> Generator<'a> {
    /// Create a generator for the project at `root`.
    ///
    /// `root` should be absolute so that absolute alias targets relativize
    /// correctly.
    pub fn new(root: impl Into<PathBuf>, layout: &'a Layout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the generated config.
    pub fn generated_path(&self) -> PathBuf {
        normalize(&self.root.join(&self.layout.out_dir).join(GENERATED_FILE))
    }

    /// The library directory joined to the root, if it exists.
    pub fn lib_dir(&self) -> Option<PathBuf> {
        self.layout
            .existing_lib_dir(&self.root)
            .map(|lib| normalize(&self.root.join(lib)))
    }

    /// Declared aliases plus `$lib` when the library directory exists.
    pub fn aliases(&self) -> AliasSet {
        AliasSet::resolve(&self.layout.alias, self.layout.existing_lib_dir(&self.root))
    }

    /// Translate the aliases into `compilerOptions.paths`.
    pub fn path_mapping(&self) -> kitsync_manifest::Result<PathMapping> {
        map_aliases(&self.aliases(), &self.root)
    }

    /// Build the generated document.
    pub fn config(&self, paths: PathMapping) -> GeneratedConfig {
        GeneratedConfig::synthesize(self.layout, &self.root, paths)
    }

    fn file(&self, paths: PathMapping) -> Result<TsConfigFile> {
        TsConfigFile::new(&self.config(paths), &self.layout.out_dir)
    }

    /// Render the generated config without writing it.
    pub fn preview(&self, paths: PathMapping) -> Result<PreviewFile> {
        let file = self.file(paths)?;
        Ok(PreviewFile {
            path: kitsync_core::posixify(&self.layout.out_dir.join(GENERATED_FILE)),
            content: file.content().to_string(),
        })
    }

    /// Write the generated config, by default only if its content changed.
    pub fn generate(&self, paths: PathMapping, overwrite: Overwrite) -> Result<GenerationResult> {
        let file = self.file(paths)?.with_overwrite(overwrite);
        let write = file.write(&self.root)?;
        let path = self.generated_path();

        tracing::debug!(path = %path.display(), ?write, "generated config");

        Ok(GenerationResult { path, write })
    }

    /// Whether the generated config on disk differs from what would be written.
    pub fn is_stale(&self, paths: PathMapping) -> Result<bool> {
        let file = self.file(paths)?;
        let current = std::fs::read_to_string(self.generated_path());
        Ok(!current.is_ok_and(|current| current == file.content()))
    }

    /// Reconcile the user config, if the project has one.
    pub fn validate(&self, paths: &PathMapping) -> kitsync_manifest::Result<Option<Validation>> {
        let Some(user_config) = UserConfig::find(&self.root) else {
            tracing::debug!(root = %self.root.display(), "no user config found");
            return Ok(None);
        };

        let warnings = reconcile::validate_file(
            &user_config,
            &self.generated_path(),
            paths,
            self.lib_dir().as_deref(),
        )?;

        Ok(Some(Validation {
            user_config,
            warnings,
        }))
    }
}
