//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`warung.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store-level settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Render command settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Store-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name used in CLI headers.
    #[serde(default = "default_store_name")]
    pub name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
        }
    }
}

fn default_store_name() -> String {
    "Warung Sedap".to_string()
}

/// Render command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Directory render output is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "dist".to_string()
}

impl CliConfig {
    /// Load config from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.store.name, "Warung Sedap");
        assert_eq!(config.render.output_dir, "dist");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [render]
            output_dir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(config.render.output_dir, "out");
        // Unset sections fall back to defaults.
        assert_eq!(config.store.name, "Warung Sedap");
    }
}
