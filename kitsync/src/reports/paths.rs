//! Paths command report.

use kitsync_codegen::PathMapping;

use super::output::{Output, Report};

/// The computed `compilerOptions.paths`.
#[derive(Debug)]
pub struct PathsReport {
    pub paths: PathMapping,
}

impl Report for PathsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.paths.is_empty() {
            out.preformatted("No aliases defined.");
            return;
        }

        for (key, targets) in self.paths.iter() {
            out.key_value(key, &targets.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use kitsync_codegen::{AliasSet, map_aliases};

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_paths() {
        let aliases: AliasSet = [("$lib", "src/lib"), ("$db", "src/db.ts")]
            .into_iter()
            .collect();
        let report = PathsReport {
            paths: map_aliases(&aliases, Path::new("/project")).unwrap(),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec!["$lib: src/lib", "$lib/*: src/lib/*", "$db: src/db.ts"]
        );
    }

    #[test]
    fn test_render_empty() {
        let mut out = RecordingOutput::default();
        PathsReport {
            paths: PathMapping::default(),
        }
        .render(&mut out);

        assert_eq!(out.stdout, vec!["No aliases defined."]);
    }
}
