//! Transform registry - named converters applied to resolved values
//!
//! A directive names a transform after `|`, optionally followed by
//! `:`-separated arguments: `${Data|json}`, `${Name|pad:8}`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ShmlError};
use crate::index::{Structure, Text};

/// Converter signature: resolved value and arguments to output bytes
pub type TransformFn = dyn Fn(&dyn Structure, &[&str]) -> Result<Vec<u8>> + Send + Sync;

/// Name of the built-in structured serialization transform
pub const JSON: &str = "json";

/// Mapping from transform name to converter
#[derive(Clone)]
pub struct TransformRegistry {
    transforms: HashMap<String, Arc<TransformFn>>,
}

impl TransformRegistry {
    /// Create a registry with no transforms
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in transforms
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(JSON, json);
        registry
    }

    /// Add a converter, replacing any converter already registered under `name`
    pub fn register<F>(&mut self, name: impl Into<String>, converter: F) -> &mut Self
    where
        F: Fn(&dyn Structure, &[&str]) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.transforms.insert(name.into(), Arc::new(converter));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Registered transform names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Apply the transform described by `transform` (`name[:arg...]`) to a value
    ///
    /// # Errors
    ///
    /// - [`ShmlError::UnsupportedTransform`] if the name is not registered
    /// - whatever the converter returns, e.g. [`ShmlError::TransformArgs`]
    pub fn apply(&self, value: &dyn Structure, transform: &str) -> Result<Vec<u8>> {
        let mut parts = transform.split(':');
        let name = parts.next().unwrap_or_default().trim();
        let args: Vec<&str> = parts.collect();

        let converter = self
            .transforms
            .get(name)
            .ok_or_else(|| ShmlError::UnsupportedTransform(name.to_string()))?;
        converter(value, &args)
    }

    /// Natural textual form, used when a directive names no transform
    pub fn format_default(value: &dyn Structure) -> Vec<u8> {
        Text(value).to_string().into_bytes()
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("transforms", &self.names())
            .finish()
    }
}

/// Reject any arguments for transforms that take none
pub fn no_args(name: &str, args: &[&str]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ShmlError::TransformArgs {
            name: name.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        })
    }
}

/// Compact JSON encoding of the value
fn json(value: &dyn Structure, args: &[&str]) -> Result<Vec<u8>> {
    no_args(JSON, args)?;
    serde_json::to_vec(&value.to_json()).map_err(|e| ShmlError::TransformFailed {
        name: JSON.to_string(),
        reason: e.to_string(),
    })
}
