// Core modules
pub mod error;
pub mod index;
pub mod template;
pub mod transform;

// Re-export commonly used types
pub use error::{Result, ShmlError};
pub use index::{ContextIndex, IndexKey, MapKey, Shape, Structure, Text, build_index};
pub use template::{Directive, MissingPolicy, Position, Template, render};
pub use transform::{TransformFn, TransformRegistry};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
