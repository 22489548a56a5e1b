//! Template module - `${...}` variable substitution against host values
//!
//! A template is scanned once for variable directives. Executing it resolves
//! every directive against a context index built from the host value and
//! splices the resolved text into the original bytes, left to right.
//!
//! ## Syntax
//!
//! - Variables: `${Name}`, `${Meta.key}` (dotted paths into nested data)
//! - Transforms: `${Data|json}`, `${Name|pad:8}` (name, then `:`-separated args)
//! - Escapes: `\${literal}`; a backslash makes the next byte literal and is kept
//!   in the output
//! - An unterminated `${` is copied through untouched

pub mod engine;
pub mod position;
mod scan;
mod vars;

pub use engine::{Directive, MissingPolicy, Template, render};
pub use position::Position;
