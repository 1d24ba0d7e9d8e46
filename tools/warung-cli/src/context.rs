//! CLI execution context.

use std::path::Path;

use anyhow::Result;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file searched for in the working directory.
const CONFIG_NAME: &str = "warung.toml";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context, preferring an explicit config path, then a
    /// `warung.toml` in the working directory, then defaults.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None if Path::new(CONFIG_NAME).exists() => CliConfig::load(CONFIG_NAME)?,
            None => CliConfig::default(),
        };

        Ok(Self { config, output })
    }
}
