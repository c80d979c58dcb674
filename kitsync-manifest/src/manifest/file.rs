use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A kitsync.toml file and its parsed manifest.
#[derive(Debug)]
pub struct KitsyncToml {
    path: PathBuf,
    manifest: Manifest,
}

impl KitsyncToml {
    /// Open and parse a kitsync.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Open `path`, falling back to the default layout when it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }

        tracing::debug!(path = %path.display(), "no manifest found, using default layout");
        Ok(Self {
            path: path.to_path_buf(),
            manifest: Manifest::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kitsync.toml");
        fs::write(&path, "[kit]\nout_dir = \"gen\"\n").unwrap();

        let file = KitsyncToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.manifest().kit.out_dir, PathBuf::from("gen"));
    }

    #[test]
    fn test_open_missing_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = KitsyncToml::open(temp.path().join("kitsync.toml")).unwrap_err();
        assert!(matches!(*err, crate::Error::Io { .. }));
    }

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let file = KitsyncToml::open_or_default(temp.path().join("kitsync.toml")).unwrap();

        assert_eq!(file.manifest().kit.out_dir, PathBuf::from(".svelte-kit"));
    }
}
