//! Reconciliation of the user's config against the generated one.
//!
//! Two checks run in order:
//!
//! 1. The user config must `extends` the generated config. If it does not,
//!    the second check is skipped.
//! 2. If the user config declares `compilerOptions.paths` and the library
//!    directory exists, `$lib` and `$lib/*` must be among them, since a
//!    `paths` override replaces the generated mapping wholesale.
//!
//! Drift never fails reconciliation; it is reported as [`Warning`]s.

mod warning;

use std::path::Path;

use kitsync_core::{normalize, posixify, project_relative, relative};
use kitsync_manifest::{Result, UserConfig};
pub use warning::Warning;

use crate::{alias::PathMapping, paths::LIB_ALIAS};

/// Read the user config at `user_config` and check it.
///
/// Fails only when the file cannot be read or parsed.
pub fn validate_file(
    user_config: &Path,
    generated_path: &Path,
    paths: &PathMapping,
    lib_dir: Option<&Path>,
) -> Result<Vec<Warning>> {
    let user = UserConfig::open(user_config)?;
    Ok(validate(&user, generated_path, paths, lib_dir))
}

/// Check `user` against the generated config at `generated_path`.
///
/// `lib_dir` is the library directory joined to the project root, given only
/// when it exists. Relative references in the user config are resolved
/// against the user config's own directory.
pub fn validate(
    user: &UserConfig,
    generated_path: &Path,
    paths: &PathMapping,
    lib_dir: Option<&Path>,
) -> Vec<Warning> {
    let dir = user.dir();
    let generated_path = normalize(generated_path);

    let extends_generated = user
        .extends()
        .iter()
        .any(|extends| normalize(&dir.join(extends)) == generated_path);

    if !extends_generated {
        return vec![Warning::NotExtendingGeneratedConfig {
            file: user.file_name(),
            extends: extends_value(dir, &generated_path),
        }];
    }

    let (Some(user_paths), Some(lib_dir)) = (user.paths(), lib_dir) else {
        return Vec::new();
    };

    let lib_dir = normalize(lib_dir);
    let lib_glob = lib_dir.join("*");
    let resolves_to = |key: &str, expected: &Path| {
        user_paths.get(key).is_some_and(|targets| {
            targets
                .iter()
                .any(|target| normalize(&dir.join(target)) == expected)
        })
    };

    let lib_glob_key = format!("{LIB_ALIAS}/*");
    if resolves_to(LIB_ALIAS, &lib_dir) && resolves_to(&lib_glob_key, &lib_glob) {
        return Vec::new();
    }

    // The generated spelling is used only when it passes the check above
    let recommended = |key: &str, expected: &Path| {
        paths
            .get(key)
            .and_then(|targets| targets.first())
            .filter(|target| normalize(&dir.join(target.as_str())) == expected)
            .cloned()
            .unwrap_or_else(|| project_relative(dir, expected))
    };

    vec![Warning::MissingLibPathOverride {
        file: user.file_name(),
        lib: recommended(LIB_ALIAS, &lib_dir),
        lib_glob: recommended(&lib_glob_key, &lib_glob),
    }]
}

/// The `extends` value leading from `dir` to the generated config.
fn extends_value(dir: &Path, generated_path: &Path) -> String {
    let relative = posixify(&relative(dir, generated_path));
    if relative.starts_with("../") {
        relative
    } else {
        format!("./{relative}")
    }
}
