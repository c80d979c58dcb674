use std::{
    fs::{self, Permissions},
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => {
                if is_unchanged(&path, &content) {
                    tracing::trace!(path = %path.display(), "content unchanged, skipping write");
                    Ok(WriteResult::Unchanged)
                } else {
                    write_file(&path, &content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Check whether the file at `path` already holds exactly `content`.
fn is_unchanged(path: &Path, content: &str) -> bool {
    fs::read(path).is_ok_and(|existing| existing == content.as_bytes())
}

/// Write `content` to `path` all-or-nothing.
///
/// The bytes are staged in a temporary file next to the target, carrying the
/// target's permissions (`0644` for a new file on Unix), which then replaces
/// the target. If the replace fails, the fully rendered content is written
/// over the target in place.
fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .wrap_err_with(|| format!("failed to create temp file in '{}'", parent.display()))?;
    if let Some(permissions) = target_permissions(path) {
        temp.as_file()
            .set_permissions(permissions)
            .wrap_err("failed to set temp file permissions")?;
    }
    temp.write_all(content.as_bytes())
        .wrap_err("failed to write temp file")?;

    if let Err(err) = temp.persist(path) {
        tracing::debug!(
            path = %path.display(),
            error = %err.error,
            "replace failed, overwriting in place"
        );
        fs::write(path, content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    }

    Ok(())
}

/// Permissions the written file should end up with.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content; nothing was touched
    Unchanged,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite, even if the content is identical
    Always,
    /// Only write when the rendered bytes differ from the file on disk
    IfChanged,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}
