//! Check operation - reconcile without writing.

use eyre::{Context, Result};
use kitsync_codegen::{Generator, PathMapping};
use kitsync_core::project_relative;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Reports whether the generated config on disk is stale and reconciles the
/// user config against where the generated config lives.
pub fn check(generator: &Generator<'_>, paths: PathMapping) -> Result<CheckReport> {
    let stale = generator
        .is_stale(paths.clone())
        .wrap_err("Failed to render generated config")?;

    Ok(CheckReport {
        generated_path: project_relative(generator.root(), &generator.generated_path()),
        alias_count: paths.len(),
        stale,
        user_config: super::reconcile(generator, &paths),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use kitsync_core::Overwrite;
    use kitsync_manifest::Layout;
    use tempfile::TempDir;

    use super::*;
    use crate::reports::UserConfigStatus;

    #[test]
    fn test_check_reports_staleness() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::default();
        let generator = Generator::new(temp.path(), &layout);

        let before = check(&generator, PathMapping::default()).unwrap();
        generator
            .generate(PathMapping::default(), Overwrite::IfChanged)
            .unwrap();
        let after = check(&generator, PathMapping::default()).unwrap();

        assert!(before.stale);
        assert!(!after.stale);
        assert_eq!(after.generated_path, ".svelte-kit/tsconfig.json");
    }

    #[test]
    fn test_check_collects_warnings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("jsconfig.json"), "{}").unwrap();
        let layout = Layout::default();
        let generator = Generator::new(temp.path(), &layout);

        let report = check(&generator, PathMapping::default()).unwrap();
        assert!(report.is_success());

        match report.user_config {
            UserConfigStatus::Checked { path, warnings } => {
                assert_eq!(path, "jsconfig.json");
                assert_eq!(warnings.len(), 1);
            }
            other => panic!("unexpected status: {other:?}"),
        }
    }
}
