//! shml.toml schema and lookup

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shml_core::MissingPolicy;

/// Config file name looked up in the working directory and config directory
pub const CONFIG_FILE: &str = "shml.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub missing: Missing,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub format: DataFormat,
}

/// Handling of directives that name no indexed variable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Missing {
    #[default]
    Drop,
    Preserve,
}

impl From<Missing> for MissingPolicy {
    fn from(missing: Missing) -> Self {
        match missing {
            Missing::Drop => MissingPolicy::Drop,
            Missing::Preserve => MissingPolicy::Preserve,
        }
    }
}

/// Encoding of a data file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Pick by file extension: `.toml` is TOML, anything else JSON
    #[default]
    Auto,
    Json,
    Toml,
}

impl DataFormat {
    /// Resolve `Auto` against the data file path
    pub fn resolve(self, path: &Path) -> DataFormat {
        match self {
            DataFormat::Auto => {
                let is_toml = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
                if is_toml {
                    DataFormat::Toml
                } else {
                    DataFormat::Json
                }
            }
            explicit => explicit,
        }
    }
}

impl Config {
    /// Read and parse a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load the config that applies to this invocation
    ///
    /// An explicit path must exist. Otherwise `./shml.toml` and then
    /// `<config dir>/shml/shml.toml` are tried, falling back to defaults.
    /// Returns the path the config was read from, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        for candidate in Self::candidates() {
            if candidate.is_file() {
                let config = Self::from_file(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    fn candidates() -> Vec<PathBuf> {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("shml").join(CONFIG_FILE));
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.missing, Missing::Drop);
        assert_eq!(config.data.format, DataFormat::Auto);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[render]
missing = "preserve"

[data]
format = "toml"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.missing, Missing::Preserve);
        assert_eq!(config.data.format, DataFormat::Toml);
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let result: std::result::Result<Config, _> = toml::from_str("[render]\nmissing = \"keep\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(Config::discover(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_config_is_used() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[render]\nmissing = \"preserve\"\n").unwrap();

        let (config, source) = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.render.missing, Missing::Preserve);
        assert_eq!(source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_format_resolution() {
        assert_eq!(
            DataFormat::Auto.resolve(Path::new("data.toml")),
            DataFormat::Toml
        );
        assert_eq!(
            DataFormat::Auto.resolve(Path::new("data.json")),
            DataFormat::Json
        );
        assert_eq!(DataFormat::Auto.resolve(Path::new("data")), DataFormat::Json);
        assert_eq!(
            DataFormat::Json.resolve(Path::new("data.toml")),
            DataFormat::Json
        );
    }

    #[test]
    fn test_missing_into_policy() {
        assert_eq!(MissingPolicy::from(Missing::Preserve), MissingPolicy::Preserve);
        assert_eq!(MissingPolicy::from(Missing::default()), MissingPolicy::Drop);
    }
}
