//! Loading host data files

use std::path::Path;

use anyhow::{Context as _, Result};
use log::debug;
use shml_core::Structure;

use crate::config::DataFormat;

/// Parsed data file, kept in its native document model
#[derive(Debug)]
pub enum HostData {
    Json(serde_json::Value),
    Toml(toml::Value),
}

impl HostData {
    /// Read `path` and parse it as `format` (`Auto` resolves by extension)
    pub fn load(path: &Path, format: DataFormat) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file {}", path.display()))?;

        let format = format.resolve(path);
        debug!("parsing {} as {:?}", path.display(), format);

        match format {
            DataFormat::Toml => {
                let table: toml::Table = toml::from_str(&content)
                    .with_context(|| format!("Invalid TOML in {}", path.display()))?;
                Ok(HostData::Toml(toml::Value::Table(table)))
            }
            DataFormat::Json | DataFormat::Auto => {
                let value = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid JSON in {}", path.display()))?;
                Ok(HostData::Json(value))
            }
        }
    }

    pub fn as_structure(&self) -> &dyn Structure {
        match self {
            HostData::Json(value) => value as &dyn Structure,
            HostData::Toml(value) => value as &dyn Structure,
        }
    }
}
