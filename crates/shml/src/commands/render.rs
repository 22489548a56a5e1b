//! Render command - execute a template against a data file

use std::path::Path;

use anyhow::{Context as _, Result};
use colored::Colorize;
use log::debug;
use shml_core::Template;

use crate::config::{DataFormat, Missing};
use crate::context::Context;
use crate::data::HostData;
use crate::output;

/// Render `template` with the values in `data`
///
/// Output bytes are written unchanged: non-UTF-8 template content passes
/// through as is. Nothing is written if execution fails.
pub fn run(
    ctx: &Context,
    template: &Path,
    data: &Path,
    format: Option<DataFormat>,
    missing: Option<Missing>,
    output_path: Option<&Path>,
) -> Result<()> {
    let source = std::fs::read(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let host = HostData::load(data, ctx.data_format(format))?;

    let mut parsed = Template::new().with_missing_policy(ctx.missing(missing).into());
    parsed.parse(source);
    debug!(
        "{}: {} directives",
        template.display(),
        parsed.directives().count()
    );

    let rendered = parsed.execute(host.as_structure())?;

    output::write_bytes(output_path, &rendered)?;

    if let Some(path) = output_path.filter(|_| ctx.verbose) {
        eprintln!(
            "{} Wrote {} bytes to {}",
            "✓".green(),
            rendered.len(),
            path.display()
        );
    }

    Ok(())
}
