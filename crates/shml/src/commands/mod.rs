//! CLI command implementations

pub mod index;
pub mod render;
pub mod vars;
