// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod alias;
mod error;
mod jsonc;
mod manifest;
mod user_config;

pub use alias::{AliasKey, AliasTarget};
pub use error::{Error, Result, SourceContext};
pub use manifest::{KitsyncToml, Layout, LayoutFiles, Manifest};
pub use user_config::{USER_CONFIG_FILES, UserConfig};
