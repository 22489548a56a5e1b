use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShmlError {
    // Execution errors
    #[error("MISSING_INDEX: template executed without a context index")]
    MissingIndex,

    // Transform errors
    #[error("UNSUPPORTED_TRANSFORM: transform '{0}' is not registered")]
    UnsupportedTransform(String),

    #[error("TRANSFORM_ARGS: transform '{name}' does not accept arguments {args:?}")]
    TransformArgs { name: String, args: Vec<String> },

    #[error("TRANSFORM_FAILED: transform '{name}' failed: {reason}")]
    TransformFailed { name: String, reason: String },

    // Indexing errors
    #[error("STRUCTURAL_TRAVERSAL: cannot index '{path}': {reason}")]
    StructuralTraversal { path: String, reason: String },
}

impl ShmlError {
    /// Upper-case code prefix of the message, for callers that branch on it
    pub fn code(&self) -> &'static str {
        match self {
            ShmlError::MissingIndex => "MISSING_INDEX",
            ShmlError::UnsupportedTransform(_) => "UNSUPPORTED_TRANSFORM",
            ShmlError::TransformArgs { .. } => "TRANSFORM_ARGS",
            ShmlError::TransformFailed { .. } => "TRANSFORM_FAILED",
            ShmlError::StructuralTraversal { .. } => "STRUCTURAL_TRAVERSAL",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShmlError>;
