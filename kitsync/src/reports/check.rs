//! Check command report data structures.

use super::{
    UserConfigStatus,
    output::{Output, Report},
};

/// Report data from checking a project without writing.
#[derive(Debug)]
pub struct CheckReport {
    /// Generated config path relative to the project root.
    pub generated_path: String,
    /// Number of `compilerOptions.paths` entries.
    pub alias_count: usize,
    /// Whether the generated config on disk is missing or outdated.
    pub stale: bool,
    /// Outcome of reconciling the user config.
    pub user_config: UserConfigStatus,
}

impl CheckReport {
    /// Whether the check passed. Staleness and warnings are advisory.
    pub fn is_success(&self) -> bool {
        self.user_config.is_success()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Generated config", &self.generated_path);
        out.key_value("Path entries", &self.alias_count.to_string());

        if self.stale {
            out.warning(&format!(
                "{} is out of date, run `kitsync sync` to update it",
                self.generated_path
            ));
        }

        self.user_config.render(out);
    }
}
