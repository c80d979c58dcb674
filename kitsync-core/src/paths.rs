//! Lexical path helpers.
//!
//! None of these functions touch the filesystem: `..` is folded against the
//! preceding component and symlinks are never followed.

use std::path::{Component, Path, PathBuf};

/// Render a path with forward slashes regardless of platform.
pub fn posixify(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Remove `.` components and fold `..` into the preceding component.
///
/// Leading `..` components of a relative path are kept, and `..` directly
/// under the root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

/// Compute the path that leads from directory `from` to `to`.
///
/// Both paths are normalized first. Identical paths yield an empty path.
pub fn relative(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);

    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from.len() {
        result.push("..");
    }
    for component in &to[common..] {
        result.push(component);
    }
    result
}

/// Express `path` relative to the project `root`, with forward slashes.
///
/// Relative inputs are taken as relative to `root`; absolute inputs keep
/// their location. The root itself is `.`.
pub fn project_relative(root: &Path, path: impl AsRef<Path>) -> String {
    let relative = posixify(&relative(root, &root.join(path)));
    if relative.is_empty() {
        ".".to_string()
    } else {
        relative
    }
}
