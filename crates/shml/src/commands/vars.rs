//! Vars command - list template directives

use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::json;
use shml_core::{Directive, Template};

use crate::context::Context;
use crate::output;

/// List the directives of `template` in source order
pub fn run(_ctx: &Context, template: &Path, json: bool) -> Result<()> {
    let source = std::fs::read(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;

    let mut parsed = Template::new();
    parsed.parse(source);
    let directives: Vec<Directive<'_>> = parsed.directives().collect();

    if json {
        render_json(&directives)
    } else {
        render_human(&directives)
    }
}

fn render_json(directives: &[Directive<'_>]) -> Result<()> {
    let entries: Vec<_> = directives
        .iter()
        .map(|d| {
            json!({
                "text": d.text(),
                "name": d.name(),
                "transform": d.transform(),
                "start": d.position().start,
                "end": d.position().end,
            })
        })
        .collect();

    output::print_json(&serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}

fn render_human(directives: &[Directive<'_>]) -> Result<()> {
    for directive in directives {
        let position = directive.position();
        let line = match directive.transform() {
            Some(transform) => format!(
                "{}..{} {} | {}",
                position.start,
                position.end,
                directive.name(),
                transform
            ),
            None => format!("{}..{} {}", position.start, position.end, directive.name()),
        };
        output::print_text(&line)?;
    }
    Ok(())
}
