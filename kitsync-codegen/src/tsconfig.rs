//! The generated tsconfig.json.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use kitsync_core::{FileRules, GeneratedFile, Overwrite, posixify, relative};
use kitsync_manifest::Layout;
use serde::Serialize;

use crate::{
    alias::PathMapping,
    paths::{
        AMBIENT_FILE, GENERATED_FILE, LOCAL_EXCLUDE, NODE_MODULES_GLOB, SERVICE_WORKER_EXTENSIONS,
        SOURCE_EXTENSIONS, TESTS_DIR, TYPES_DIR, TYPES_GLOB,
    },
};

/// The generated config document.
///
/// Field order here is the field order in the written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedConfig {
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    // generated options
    pub base_url: String,
    pub paths: PathMapping,
    pub root_dirs: Vec<String>,

    // essential options
    pub verbatim_module_syntax: bool,
    pub isolated_modules: bool,
    pub lib: Vec<String>,
    pub module_resolution: String,
    pub module: String,
    pub no_emit: bool,
    pub target: String,
}

impl CompilerOptions {
    fn new(base_url: String, paths: PathMapping) -> Self {
        Self {
            root_dirs: vec![base_url.clone(), TYPES_DIR.to_string()],
            base_url,
            paths,
            verbatim_module_syntax: true,
            isolated_modules: true,
            lib: vec!["esnext".into(), "DOM".into(), "DOM.Iterable".into()],
            module_resolution: "bundler".into(),
            module: "esnext".into(),
            no_emit: true,
            target: "esnext".into(),
        }
    }
}

impl GeneratedConfig {
    /// Build the document for the project at `root`.
    ///
    /// `include` and `exclude` entries are relative to the output directory,
    /// where the file is written; `paths` stay relative to the project root.
    pub fn synthesize(layout: &Layout, root: &Path, paths: PathMapping) -> Self {
        let out_dir = root.join(&layout.out_dir);
        let config_relative = |file: &Path| posixify(&relative(&out_dir, &root.join(file)));

        let mut include = vec![
            AMBIENT_FILE.to_string(),
            TYPES_GLOB.to_string(),
            config_relative(&layout.config_file),
        ];
        let source_dirs = [&layout.files.routes, &layout.files.lib]
            .map(|dir| dir.parent().unwrap_or_else(|| Path::new("")));
        for dir in source_dirs.into_iter().chain([Path::new(TESTS_DIR)]) {
            for glob in source_globs(dir) {
                push_unique(&mut include, config_relative(&glob));
            }
        }

        let mut exclude = vec![
            config_relative(Path::new(NODE_MODULES_GLOB)),
            LOCAL_EXCLUDE.to_string(),
        ];
        let service_worker = &layout.files.service_worker;
        if service_worker.extension().is_some() {
            exclude.push(config_relative(service_worker));
        } else {
            // Any of these may be the entry point
            let base = posixify(service_worker);
            for ext in SERVICE_WORKER_EXTENSIONS {
                exclude.push(config_relative(Path::new(&format!("{base}.{ext}"))));
            }
        }

        Self {
            compiler_options: CompilerOptions::new(config_relative(Path::new(".")), paths),
            include,
            exclude,
        }
    }

    /// Serialize with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// `<dir>/**/*.<ext>` for every source extension.
fn source_globs(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    SOURCE_EXTENSIONS
        .iter()
        .map(move |ext| dir.join("**").join(format!("*.{ext}")))
}

// Routes and lib usually share a parent directory
fn push_unique(list: &mut Vec<String>, entry: String) {
    if !list.contains(&entry) {
        list.push(entry);
    }
}

/// The generated config as a file under the output directory.
#[derive(Debug, Clone)]
pub struct TsConfigFile {
    out_dir: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl TsConfigFile {
    /// Render `config` for writing into `out_dir`.
    pub fn new(config: &GeneratedConfig, out_dir: impl Into<PathBuf>) -> Result<Self> {
        let content = config
            .to_json()
            .wrap_err("failed to serialize generated config")?;
        Ok(Self {
            out_dir: out_dir.into(),
            content,
            overwrite: Overwrite::IfChanged,
        })
    }

    /// Override when the file gets written.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// The serialized document.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for TsConfigFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.out_dir).join(GENERATED_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
