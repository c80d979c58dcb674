//! Core operations.
//!
//! This module contains the business logic for kitsync commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod sync;

pub use check::check;
use kitsync_codegen::{Generator, PathMapping};
use kitsync_core::project_relative;
pub use sync::sync;

use crate::reports::UserConfigStatus;

/// Reconcile the user config and capture the outcome for reporting.
///
/// An unparsable user config is rendered here so the report can print it
/// after whatever else the command did.
fn reconcile(generator: &Generator<'_>, paths: &PathMapping) -> UserConfigStatus {
    match generator.validate(paths) {
        Ok(None) => UserConfigStatus::Missing,
        Ok(Some(validation)) => UserConfigStatus::Checked {
            path: project_relative(generator.root(), &validation.user_config),
            warnings: validation.warnings,
        },
        Err(e) => UserConfigStatus::Unparsable(format!("{:?}", miette::Report::new(*e))),
    }
}
