//! Structural indexer - flatten host values into dotted-path lookups
//!
//! A host value describes itself through the [`Structure`] trait. The indexer
//! walks records and mappings, recording every field and entry under its
//! dotted path, and stores a reference into the host value at each path.
//!
//! ## Paths
//!
//! - Record field: `Meta`, `Data.Type`
//! - Mapping entry: `Meta.kstring`, `Meta.map-int-key.2`
//! - Lists and scalars are recorded whole and never descended
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use shml_core::build_index;
//!
//! let meta = BTreeMap::from([("kstring".to_string(), "x".to_string())]);
//! let data = BTreeMap::from([("Meta".to_string(), meta)]);
//! let index = build_index(&data).unwrap();
//! assert_eq!(index.keys(), vec!["Meta", "Meta.kstring"]);
//! ```

mod adapters;
mod record;
mod structure;
mod walk;

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::Result;
use walk::IndexWalker;

pub use structure::{AsStructure, IndexKey, MapKey, Shape, Structure, Text};

/// Mapping from dotted path to a value borrowed from the host data
#[derive(Default)]
pub struct ContextIndex<'a> {
    entries: HashMap<String, &'a dyn Structure>,
}

impl<'a> ContextIndex<'a> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Record a value at a path, replacing any earlier value at the same path
    pub fn insert(&mut self, path: impl Into<String>, value: &'a dyn Structure) {
        self.entries.insert(path.into(), value);
    }

    /// Look up the value recorded at a path
    pub fn get(&self, path: &str) -> Option<&'a dyn Structure> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded paths and values in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a dyn Structure)> + '_ {
        self.entries.iter().map(|(path, value)| (path.as_str(), *value))
    }

    /// Recorded paths, sorted ascending
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for ContextIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys().into_iter().map(|key| {
                let text = self
                    .get(key)
                    .map(|value| Text(value).to_string())
                    .unwrap_or_default();
                (key, text)
            }))
            .finish()
    }
}

/// Build a context index for a host value
///
/// A root that is neither a record nor a mapping yields an empty index.
///
/// # Errors
///
/// Returns [`crate::ShmlError::StructuralTraversal`] if any visited node
/// reports itself as inaccessible.
pub fn build_index(data: &dyn Structure) -> Result<ContextIndex<'_>> {
    let index = IndexWalker::new().walk(data)?;
    debug!("built context index with {} paths", index.len());
    Ok(index)
}
