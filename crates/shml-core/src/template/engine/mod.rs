//! Template engine implementation

use std::borrow::Cow;

use log::{debug, trace};

use super::position::Position;
use super::scan::Scanner;
use super::vars::{VariableTable, holds};
use crate::error::{Result, ShmlError};
use crate::index::{ContextIndex, Structure, build_index};
use crate::transform::TransformRegistry;

/// What to emit for a directive whose name is not in the context index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Emit nothing; the directive text is dropped from the output
    #[default]
    Drop,
    /// Keep the literal `${...}` text
    Preserve,
}

/// A registered directive, viewed against the template buffer
#[derive(Debug, Clone, Copy)]
pub struct Directive<'t> {
    text: &'t str,
    position: Position,
    buf: &'t [u8],
}

impl<'t> Directive<'t> {
    /// Full directive text, `${` and `}` included
    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn name(&self) -> Cow<'t, str> {
        String::from_utf8_lossy(self.position.name(self.buf).unwrap_or_default())
    }

    pub fn transform(&self) -> Option<Cow<'t, str>> {
        self.position
            .transform(self.buf)
            .map(String::from_utf8_lossy)
    }
}

/// Parsed template: buffer, directive table and execution settings
///
/// Execution never mutates the template, so one parsed template can be shared
/// across threads and executed concurrently.
#[derive(Debug, Clone, Default)]
pub struct Template {
    buf: Vec<u8>,
    vars: VariableTable,
    transforms: TransformRegistry,
    missing: MissingPolicy,
}

impl Template {
    /// Create an empty template with the built-in transforms
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty template with the given transforms
    pub fn with_transforms(transforms: TransformRegistry) -> Self {
        Self {
            transforms,
            ..Self::default()
        }
    }

    /// Set what is emitted for directives that resolve to nothing
    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// Scan `buf` for directives
    ///
    /// Calling `parse` again replaces the buffer and merges newly found
    /// directives into the existing table. An earlier entry whose span no
    /// longer holds its text moves to the text's first occurrence in the new
    /// buffer; if the text is gone, the entry is ignored at execution.
    pub fn parse(&mut self, buf: impl Into<Vec<u8>>) {
        self.buf = buf.into();

        for position in Scanner::new(&self.buf) {
            let Some(span) = position.span(&self.buf) else {
                continue;
            };
            let text = String::from_utf8_lossy(span).into_owned();
            self.vars.insert(text, position, &self.buf);
        }
        self.vars.sort_by_start();

        debug!(
            "parsed template of {} bytes, {} directives",
            self.buf.len(),
            self.vars.len()
        );
    }

    /// Build a context index for `data` and apply it
    ///
    /// # Errors
    ///
    /// Propagates indexing errors and [`Template::execute_index`] errors.
    pub fn execute(&self, data: &dyn Structure) -> Result<Vec<u8>> {
        let index = build_index(data)?;
        self.execute_index(Some(&index))
    }

    /// Apply a context index to the template
    ///
    /// # Errors
    ///
    /// - [`ShmlError::MissingIndex`] if `index` is `None`
    /// - any transform error; no partial output is returned
    pub fn execute_index(&self, index: Option<&ContextIndex<'_>>) -> Result<Vec<u8>> {
        let index = index.ok_or(ShmlError::MissingIndex)?;

        let mut output = Vec::with_capacity(self.buf.len());
        let mut cursor = 0;

        for directive in self.directives() {
            let position = directive.position;
            if position.start < cursor {
                trace!("skipping overlapping directive {}", directive.text);
                continue;
            }

            let name = directive.name();
            let resolved = match index.get(&name) {
                Some(value) => self.resolve(value, directive.transform().as_deref())?,
                None => match self.missing {
                    MissingPolicy::Drop => {
                        trace!("dropping unresolved directive {}", directive.text);
                        Vec::new()
                    }
                    MissingPolicy::Preserve => {
                        trace!("preserving unresolved directive {}", directive.text);
                        continue;
                    }
                },
            };

            output.extend_from_slice(&self.buf[cursor..position.start]);
            output.extend_from_slice(&resolved);
            cursor = position.end + 1;
        }

        output.extend_from_slice(&self.buf[cursor..]);
        debug!("executed template into {} bytes", output.len());
        Ok(output)
    }

    /// Registered directives in source order
    ///
    /// Entries left stale by a re-parse are not listed.
    pub fn directives(&self) -> impl Iterator<Item = Directive<'_>> + '_ {
        self.vars.iter().filter_map(|(text, position)| {
            if !holds(&self.buf, position, text) {
                trace!("skipping stale directive {}", text);
                return None;
            }
            Some(Directive {
                text,
                position,
                buf: &self.buf,
            })
        })
    }

    /// The template buffer as last parsed
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }

    fn resolve(&self, value: &dyn Structure, transform: Option<&str>) -> Result<Vec<u8>> {
        match transform {
            Some(transform) => self.transforms.apply(value, transform),
            None => Ok(TransformRegistry::format_default(value)),
        }
    }
}

/// Convenience function to parse and execute a template in one step
pub fn render(template: impl Into<Vec<u8>>, data: &dyn Structure) -> Result<Vec<u8>> {
    let mut parsed = Template::new();
    parsed.parse(template);
    parsed.execute(data)
}

#[cfg(test)]
mod tests;
