use clap::Args;
use eyre::Result;
use kitsync_codegen::Generator;
use kitsync_core::Overwrite;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the generated config without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Write the generated config even if its content is unchanged
    #[arg(long)]
    pub force: bool,
}

impl SyncCommand {
    pub fn run(&self) -> Result<()> {
        let (root, kitsync_toml) = self.project.open()?;
        let generator = Generator::new(root, &kitsync_toml.manifest().kit);
        let paths = generator.path_mapping().unwrap_or_exit();

        let report = ops::sync(
            &generator,
            paths,
            ops::sync::SyncOptions {
                dry_run: self.dry_run,
                overwrite: if self.force {
                    Overwrite::Always
                } else {
                    Overwrite::IfChanged
                },
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
