//! Translation of alias declarations into `compilerOptions.paths`.
//!
//! The translation is split in two steps:
//!
//! 1. [`AliasSet::resolve`] augments the declared aliases with `$lib` when
//!    the library directory exists. The existence check is done by the caller
//!    (see [`Layout::existing_lib_dir`]), so this step stays pure.
//! 2. [`map_aliases`] classifies every entry and emits the resolution
//!    patterns, relative to the project root.
//!
//! ```ignore
//! let aliases = AliasSet::resolve(&layout.alias, layout.existing_lib_dir(root));
//! let paths = map_aliases(&aliases, root)?;
//! assert_eq!(paths.get("$lib/*"), Some(&["src/lib/*".to_string()][..]));
//! ```
//!
//! [`Layout::existing_lib_dir`]: kitsync_manifest::Layout::existing_lib_dir

use std::path::Path;

use indexmap::IndexMap;
use kitsync_core::{posixify, project_relative};
use kitsync_manifest::{AliasKey, AliasTarget, Result};
use serde::Serialize;

use crate::paths::LIB_ALIAS;

/// Alias declarations ready for mapping, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSet {
    entries: IndexMap<String, String>,
}

impl AliasSet {
    /// Build the alias set from declared aliases and the library directory.
    ///
    /// `lib_dir` must only be given when the directory exists. `$lib` comes
    /// first and takes precedence over a declared `$lib`.
    pub fn resolve(declared: &IndexMap<String, String>, lib_dir: Option<&Path>) -> Self {
        let mut entries = IndexMap::with_capacity(declared.len() + 1);

        if let Some(lib_dir) = lib_dir {
            tracing::debug!(lib = %lib_dir.display(), "injecting {LIB_ALIAS} alias");
            entries.insert(LIB_ALIAS.to_string(), posixify(lib_dir));
        }

        for (key, value) in declared {
            if key == LIB_ALIAS && lib_dir.is_some() {
                continue;
            }
            entries.insert(key.clone(), value.clone());
        }

        Self { entries }
    }

    /// Whether `key` is declared.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Alias key to resolution patterns, as written to `compilerOptions.paths`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathMapping(IndexMap<String, Vec<String>>);

impl PathMapping {
    /// Resolution patterns for `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, key: impl Into<String>, pattern: String) {
        self.0.insert(key.into(), vec![pattern]);
    }
}

/// Translate an alias set into path mapping rules.
///
/// Values are made relative to `root` with forward slashes. A key without
/// `/*` whose value has no file extension also gets a `key/*` sibling, unless
/// the alias set declares `key/*` itself.
pub fn map_aliases(aliases: &AliasSet, root: &Path) -> Result<PathMapping> {
    let mut paths = PathMapping::default();

    for (key, value) in aliases.iter() {
        let alias = AliasKey::parse(key)?;
        let target = AliasTarget::parse(key, value)?;
        let relative = project_relative(root, target.base());

        tracing::trace!(
            key,
            value,
            name = alias.base(),
            wildcard_target = target.has_wildcard(),
            %relative,
            "mapping alias"
        );

        if alias.has_wildcard() {
            paths.insert(key, format!("{relative}/*"));
            continue;
        }

        paths.insert(key, relative.clone());

        let sibling = format!("{key}/*");
        if target.extension().is_none() && !aliases.contains_key(&sibling) {
            paths.insert(sibling, format!("{relative}/*"));
        }
    }

    Ok(paths)
}
