/// Core error types for the Arloom engine.

/// A specialized Result type for Arloom operations.
pub type ArloomResult<T> = Result<T, ArloomError>;

/// Top-level error type encompassing all Arloom subsystems.
#[derive(Debug, thiserror::Error)]
pub enum ArloomError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("attribute '{name}': {message}")]
    Attribute { name: String, message: String },

    #[error("unknown special effect: {0}")]
    UnknownEffect(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

impl ArloomError {
    /// Create an attribute error for a named serialized field.
    pub fn attribute(name: impl Into<String>, message: impl Into<String>) -> Self {
        ArloomError::Attribute {
            name: name.into(),
            message: message.into(),
        }
    }
}
