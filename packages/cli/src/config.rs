use anyhow::Context;
use jsonsample_sampler::{OutputFormat, SamplerOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "jsonsample.config.json";

/// jsonsample configuration file format
///
/// Sampler options sit at the top level next to the output settings:
///
/// ```json
/// { "format": "commented", "indent": 2, "maxDepth": 64, "fieldNaming": "snakeCase" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub format: OutputFormat,

    /// Spaces per nesting level; 0 prints strict formats on one line
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Add the standard collection declarations to every loaded model
    #[serde(default = "default_prelude")]
    pub prelude: bool,

    #[serde(flatten)]
    pub sampler: SamplerOptions,
}

fn default_indent() -> usize {
    2
}

fn default_prelude() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Load an explicitly named config file, which must exist
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            indent: default_indent(),
            prelude: default_prelude(),
            sampler: SamplerOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonsample_sampler::{FieldNaming, ValueKind};

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "format": "commented",
            "indent": 4,
            "prelude": false,
            "maxDepth": 64,
            "detectCycles": true,
            "simpleTypes": ["Money"],
            "fieldNaming": "snakeCase",
            "values": "random"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.format, OutputFormat::Commented);
        assert_eq!(config.indent, 4);
        assert!(!config.prelude);
        assert_eq!(config.sampler.max_depth, 64);
        assert!(config.sampler.detect_cycles);
        assert_eq!(config.sampler.simple_types, vec!["Money"]);
        assert_eq!(config.sampler.field_naming, FieldNaming::SnakeCase);
        assert_eq!(config.sampler.values, ValueKind::Random);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.indent, 2);
        assert!(config.prelude);
        assert_eq!(config.sampler.max_depth, 500);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "format": "strict", "indent": 0 }"#,
        )
        .unwrap();

        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.format, OutputFormat::Strict);
        assert_eq!(config.indent, 0);
    }

    #[test]
    fn test_invalid_config_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        std::fs::write(&path, r#"{ "format": "yaml" }"#).unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(err.to_string().contains(DEFAULT_CONFIG_NAME));
    }
}
