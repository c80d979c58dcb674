//! The hand-authored `tsconfig.json` / `jsconfig.json` of a project.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::{Error, Result, error::SourceContext, jsonc};

/// Recognized user config filenames, in lookup order.
pub const USER_CONFIG_FILES: [&str; 2] = ["tsconfig.json", "jsconfig.json"];

/// The parts of a user config that matter for reconciliation.
///
/// Only `extends` and `compilerOptions.paths` are extracted; everything else
/// in the file is ignored.
#[derive(Debug, Clone)]
pub struct UserConfig {
    path: PathBuf,
    extends: Vec<String>,
    paths: Option<IndexMap<String, Vec<String>>>,
}

impl UserConfig {
    /// Locate the user config in `root`; the first recognized filename wins.
    pub fn find(root: &Path) -> Option<PathBuf> {
        USER_CONFIG_FILES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
    }

    /// Read and parse the user config at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content, path)
    }

    /// Parse user config `content` that was read from `path`.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let source_ctx = SourceContext::new(content, file_name(&path));

        let value: Value = serde_json::from_str(&jsonc::sanitize(content))
            .map_err(|e| source_ctx.user_config_error(e.to_string(), e.line(), e.column()))?;
        let Value::Object(root) = value else {
            return Err(source_ctx.user_config_error("expected a JSON object", 1, 1));
        };

        let extends = match root.get("extends") {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => strings(items),
            _ => Vec::new(),
        };

        let paths = root
            .get("compilerOptions")
            .and_then(|options| options.get("paths"))
            .and_then(Value::as_object)
            .map(|paths| {
                paths
                    .iter()
                    .map(|(key, targets)| {
                        let targets = match targets {
                            Value::Array(items) => strings(items),
                            _ => Vec::new(),
                        };
                        (key.clone(), targets)
                    })
                    .collect()
            });

        tracing::debug!(path = %path.display(), ?extends, "parsed user config");

        Ok(Self {
            path,
            extends,
            paths,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that relative references in the file resolve against.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// The filename, e.g. `tsconfig.json`.
    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }

    /// Declared `extends` values; TypeScript accepts a string or an array.
    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    /// Declared `compilerOptions.paths`, if the file has any.
    pub fn paths(&self) -> Option<&IndexMap<String, Vec<String>>> {
        self.paths.as_ref()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_extends_and_paths() {
        let config = UserConfig::parse(
            r#"{
                // generated by the framework
                "extends": "./.svelte-kit/tsconfig.json",
                "compilerOptions": {
                    "strict": true,
                    "paths": {
                        "$lib": ["src/lib"],
                        "$lib/*": ["src/lib/*"],
                    },
                },
            }"#,
            "/project/tsconfig.json",
        )
        .unwrap();

        assert_eq!(config.extends(), ["./.svelte-kit/tsconfig.json"]);
        let paths = config.paths().unwrap();
        assert_eq!(paths["$lib"], vec!["src/lib"]);
        assert_eq!(paths["$lib/*"], vec!["src/lib/*"]);
        assert_eq!(config.dir(), Path::new("/project"));
        assert_eq!(config.file_name(), "tsconfig.json");
    }

    #[test]
    fn test_parse_extends_array() {
        let config = UserConfig::parse(
            r#"{ "extends": ["@tsconfig/strictest", "./.svelte-kit/tsconfig.json"] }"#,
            "tsconfig.json",
        )
        .unwrap();

        assert_eq!(config.extends().len(), 2);
        assert!(config.paths().is_none());
    }

    #[test]
    fn test_parse_without_extends() {
        let config = UserConfig::parse("{}", "jsconfig.json").unwrap();
        assert!(config.extends().is_empty());
        assert!(config.paths().is_none());
    }

    #[test]
    fn test_parse_broken_file() {
        let err = UserConfig::parse("{\n  \"extends\": \n}", "tsconfig.json").unwrap_err();
        match *err {
            Error::UnparsableUserConfig { filename, span, .. } => {
                assert_eq!(filename, "tsconfig.json");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_object() {
        let err = UserConfig::parse("[]", "tsconfig.json").unwrap_err();
        assert!(matches!(*err, Error::UnparsableUserConfig { .. }));
    }

    #[test]
    fn test_find_prefers_tsconfig() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("jsconfig.json"), "{}").unwrap();
        assert_eq!(
            UserConfig::find(temp.path()),
            Some(temp.path().join("jsconfig.json"))
        );

        fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();
        assert_eq!(
            UserConfig::find(temp.path()),
            Some(temp.path().join("tsconfig.json"))
        );
    }

    #[test]
    fn test_find_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(UserConfig::find(temp.path()), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = UserConfig::open("/nonexistent/tsconfig.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
