//! Outcome of reconciling the user config, shared by sync and check.

use kitsync_codegen::Warning;

use super::output::Output;

/// What happened when the user config was reconciled.
#[derive(Debug)]
pub enum UserConfigStatus {
    /// Neither tsconfig.json nor jsconfig.json exists.
    Missing,
    /// The user config was read and checked.
    Checked {
        /// Path relative to the project root.
        path: String,
        warnings: Vec<Warning>,
    },
    /// The user config could not be parsed; holds the rendered diagnostic.
    Unparsable(String),
}

impl UserConfigStatus {
    /// Whether reconciliation could run. Warnings do not count as failure.
    pub fn is_success(&self) -> bool {
        !matches!(self, UserConfigStatus::Unparsable(_))
    }

    pub(crate) fn render(&self, out: &mut dyn Output) {
        match self {
            UserConfigStatus::Missing => {}
            UserConfigStatus::Checked { path, warnings } => {
                for warning in warnings {
                    out.warning(&warning.to_string());
                }
                if warnings.is_empty() {
                    out.preformatted(&format!("✓ {} extends the generated config", path));
                }
            }
            UserConfigStatus::Unparsable(diagnostic) => out.error(diagnostic),
        }
    }
}
