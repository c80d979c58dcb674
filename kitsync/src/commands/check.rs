use clap::Args;
use eyre::Result;
use kitsync_codegen::Generator;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (root, kitsync_toml) = self.project.open()?;
        let generator = Generator::new(root, &kitsync_toml.manifest().kit);
        let paths = generator.path_mapping().unwrap_or_exit();

        let report = ops::check(&generator, paths)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
