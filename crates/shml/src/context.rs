//! Global context for CLI commands

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::debug;

use crate::config::{Config, DataFormat, Missing};

/// Settings shared by every command: loaded config plus global flags
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Create a new context by locating and loading the config
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing, or if any
    /// config file found cannot be read or parsed.
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let (config, source) = Config::discover(config_path)?;

        match &source {
            Some(path) => {
                debug!("loaded config from {}", path.display());
                if verbose {
                    eprintln!("{} Using config {}", "→".cyan(), path.display());
                }
            }
            None => debug!("no config file found, using defaults"),
        }

        Ok(Self { config, verbose })
    }

    /// Data format from the flag, else from config
    pub fn data_format(&self, flag: Option<DataFormat>) -> DataFormat {
        flag.unwrap_or(self.config.data.format)
    }

    /// Missing-variable handling from the flag, else from config
    pub fn missing(&self, flag: Option<Missing>) -> Missing {
        flag.unwrap_or(self.config.render.missing)
    }
}
