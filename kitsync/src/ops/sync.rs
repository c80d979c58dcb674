//! Sync operation - write the generated config and reconcile the user config.

use eyre::{Context, Result};
use kitsync_codegen::{Generator, PathMapping};
use kitsync_core::{Overwrite, project_relative};

use crate::reports::{Generation, SyncReport};

/// Options for the sync operation.
pub struct SyncOptions {
    /// Whether to preview without writing.
    pub dry_run: bool,
    /// When the generated config gets rewritten.
    pub overwrite: Overwrite,
}

/// Execute the sync operation.
///
/// The generated config is written before the user config is read, so a
/// broken user config never blocks generation.
pub fn sync(
    generator: &Generator<'_>,
    paths: PathMapping,
    opts: SyncOptions,
) -> Result<SyncReport> {
    let generation = if opts.dry_run {
        let preview = generator
            .preview(paths.clone())
            .wrap_err("Failed to render generated config")?;
        Generation::Preview(preview)
    } else {
        let result = generator
            .generate(paths.clone(), opts.overwrite)
            .wrap_err("Failed to write generated config")?;
        Generation::Written {
            path: project_relative(generator.root(), &result.path),
            write: result.write,
        }
    };

    Ok(SyncReport {
        generation,
        user_config: super::reconcile(generator, &paths),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use kitsync_core::WriteResult;
    use kitsync_manifest::Layout;
    use tempfile::TempDir;

    use super::*;
    use crate::reports::UserConfigStatus;

    fn options(dry_run: bool) -> SyncOptions {
        SyncOptions {
            dry_run,
            overwrite: Overwrite::IfChanged,
        }
    }

    #[test]
    fn test_sync_writes_then_skips() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::default();
        let generator = Generator::new(temp.path(), &layout);

        let first = sync(&generator, PathMapping::default(), options(false)).unwrap();
        let second = sync(&generator, PathMapping::default(), options(false)).unwrap();

        assert!(matches!(
            first.generation,
            Generation::Written { ref path, write: WriteResult::Written } if path == ".svelte-kit/tsconfig.json"
        ));
        assert!(matches!(
            second.generation,
            Generation::Written {
                write: WriteResult::Unchanged,
                ..
            }
        ));
        assert!(matches!(first.user_config, UserConfigStatus::Missing));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::default();
        let generator = Generator::new(temp.path(), &layout);

        let report = sync(&generator, PathMapping::default(), options(true)).unwrap();

        assert!(matches!(report.generation, Generation::Preview(_)));
        assert!(!generator.generated_path().exists());
    }

    #[test]
    fn test_unparsable_user_config_after_write() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tsconfig.json"), "{ nope").unwrap();
        let layout = Layout::default();
        let generator = Generator::new(temp.path(), &layout);

        let report = sync(&generator, PathMapping::default(), options(false)).unwrap();

        assert!(generator.generated_path().exists());
        assert!(matches!(report.user_config, UserConfigStatus::Unparsable(_)));
        assert!(!report.is_success());
    }
}
