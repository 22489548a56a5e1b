//! Recursive walker flattening a host value into a [`ContextIndex`]

use log::trace;

use super::ContextIndex;
use super::structure::{Shape, Structure};
use crate::error::{Result, ShmlError};

/// Path label used in errors raised at the root value
pub(crate) const ROOT_PATH: &str = "<root>";

/// Walks a host value, recording every field and entry under its dotted path
pub(crate) struct IndexWalker<'a> {
    index: ContextIndex<'a>,
    /// Segments of the node currently being visited
    stack: Vec<String>,
}

impl<'a> IndexWalker<'a> {
    pub fn new() -> Self {
        Self {
            index: ContextIndex::new(),
            stack: Vec::new(),
        }
    }

    /// Walk from the root value and return the finished index
    pub fn walk(mut self, root: &'a dyn Structure) -> Result<ContextIndex<'a>> {
        let shape = unwrap_shape(root, ROOT_PATH)?;
        self.visit_children(shape)?;
        Ok(self.index)
    }

    /// Full dotted path for a child of the current node
    fn path(&self, segment: &str) -> String {
        if self.stack.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.stack.join("."), segment)
        }
    }

    fn visit_children(&mut self, shape: Shape<'a>) -> Result<()> {
        match shape {
            Shape::Record(fields) => {
                for (name, value) in fields {
                    self.visit_entry(name, value)?;
                }
            }
            Shape::Mapping(entries) => {
                for (key, value) in entries {
                    match key.segment() {
                        Some(segment) => self.visit_entry(&segment, value)?,
                        None => trace!("skipping unsupported map key {:?}", key),
                    }
                }
            }
            Shape::Boxed(_) | Shape::Leaf | Shape::Inaccessible(_) => {}
        }
        Ok(())
    }

    /// Record one field or entry, descending if its value is nested
    fn visit_entry(&mut self, segment: &str, value: &'a dyn Structure) -> Result<()> {
        let path = self.path(segment);
        let shape = unwrap_shape(value, &path)?;
        self.index.insert(path, value);

        if !shape.is_nested() {
            return Ok(());
        }

        self.stack.push(segment.to_string());
        let result = self.visit_children(shape);
        self.stack.pop();
        result
    }
}

/// Resolve dynamic wrappers down to the shape of the concrete value
///
/// Nil wrappers resolve to [`Shape::Leaf`].
fn unwrap_shape<'a>(value: &'a dyn Structure, path: &str) -> Result<Shape<'a>> {
    let mut shape = value.shape();
    loop {
        shape = match shape {
            Shape::Boxed(Some(inner)) => inner.shape(),
            Shape::Boxed(None) => return Ok(Shape::Leaf),
            Shape::Inaccessible(reason) => {
                return Err(ShmlError::StructuralTraversal {
                    path: path.to_string(),
                    reason,
                });
            }
            resolved => return Ok(resolved),
        };
    }
}
