mod check;
mod completions;
mod paths;
mod sync;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result};
use kitsync_manifest::KitsyncToml;
use paths::PathsCommand;
use sync::SyncCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for kitsync_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Arguments locating the project, shared by every project command.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Path to kitsync.toml, relative to the project root
    #[arg(short, long, default_value = "kitsync.toml")]
    pub config: PathBuf,

    /// Project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl ProjectArgs {
    /// Absolute project root and its manifest.
    ///
    /// A missing manifest yields the default layout.
    pub fn open(&self) -> Result<(PathBuf, KitsyncToml)> {
        let root = std::path::absolute(&self.root)
            .wrap_err_with(|| format!("Failed to resolve {}", self.root.display()))?;
        let manifest = KitsyncToml::open_or_default(root.join(&self.config)).unwrap_or_exit();
        tracing::debug!(
            root = %root.display(),
            manifest = %manifest.path().display(),
            "opened project"
        );
        Ok((root, manifest))
    }
}

#[derive(Parser)]
#[command(name = "kitsync")]
#[command(version)]
#[command(about = "Generate and reconcile tsconfig.json for SvelteKit-style projects")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Sync(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Paths(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the generated tsconfig.json and check the user config
    Sync(SyncCommand),

    /// Check the user config without writing anything
    Check(CheckCommand),

    /// Print the compilerOptions.paths computed from the aliases
    Paths(PathsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
