//! Sync command report data structures.

use kitsync_codegen::PreviewFile;
use kitsync_core::WriteResult;

use super::{
    UserConfigStatus,
    output::{Output, Report},
};

/// Report data from a sync.
#[derive(Debug)]
pub struct SyncReport {
    /// What happened to the generated config.
    pub generation: Generation,
    /// Outcome of reconciling the user config.
    pub user_config: UserConfigStatus,
}

/// What happened to the generated config.
#[derive(Debug)]
pub enum Generation {
    /// The file was written or found up to date.
    Written {
        /// Path relative to the project root.
        path: String,
        write: WriteResult,
    },
    /// Dry-run preview.
    Preview(PreviewFile),
}

impl SyncReport {
    /// Whether the command should exit successfully.
    pub fn is_success(&self) -> bool {
        self.user_config.is_success()
    }
}

impl Report for SyncReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.generation {
            Generation::Written { path, write } => match write {
                WriteResult::Written => out.key_value("Generated", path),
                WriteResult::Unchanged => out.key_value("Up to date", path),
            },
            Generation::Preview(file) => {
                out.divider(&file.path);
                out.preformatted(file.content.trim_end());
                out.divider("Summary");
                out.preformatted("1 file would be generated");
            }
        }

        self.user_config.render(out);
    }
}
