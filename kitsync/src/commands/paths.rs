use clap::Args;
use eyre::Result;
use kitsync_codegen::Generator;

use super::{ProjectArgs, UnwrapOrExit};
use crate::reports::{PathsReport, Report, TerminalOutput};

#[derive(Args)]
pub struct PathsCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl PathsCommand {
    pub fn run(&self) -> Result<()> {
        let (root, kitsync_toml) = self.project.open()?;
        let generator = Generator::new(root, &kitsync_toml.manifest().kit);

        let report = PathsReport {
            paths: generator.path_mapping().unwrap_or_exit(),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
