//! Index command - list variable paths provided by a data file

use std::path::Path;

use anyhow::Result;
use shml_core::build_index;

use crate::config::DataFormat;
use crate::context::Context;
use crate::data::HostData;
use crate::output;

pub fn run(ctx: &Context, data: &Path, format: Option<DataFormat>, json: bool) -> Result<()> {
    let host = HostData::load(data, ctx.data_format(format))?;
    let index = build_index(host.as_structure())?;
    let keys = index.keys();

    if json {
        output::print_json(&serde_json::to_string_pretty(&keys)?)?;
    } else {
        for key in keys {
            output::print_text(key)?;
        }
    }
    Ok(())
}
