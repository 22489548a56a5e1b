//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DataFormat, Missing};

#[derive(Parser)]
#[command(name = "shml")]
#[command(version, about = "Render ${...} templates against structured data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./shml.toml, then the user config directory)
    #[arg(short, long, global = true, env = "SHML_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against a data file
    Render {
        /// Template file
        template: PathBuf,

        /// JSON or TOML data file
        #[arg(short, long)]
        data: PathBuf,

        /// Data file format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<DataFormat>,

        /// What to emit for unresolved directives (overrides config)
        #[arg(short, long, value_enum)]
        missing: Option<Missing>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the directives found in a template
    Vars {
        /// Template file
        template: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the variable paths a data file provides
    Index {
        /// JSON or TOML data file
        #[arg(short, long)]
        data: PathBuf,

        /// Data file format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<DataFormat>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
