use thiserror::Error;

/// Error type for invalid operations.
///
/// The estimation models are total over their inputs, so these errors only
/// arise at the boundary: validating operator-provided application facts,
/// loading configuration and producing the canonical audit payload.
#[derive(Error, Debug)]
pub enum ERWError {
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("Could not serialise canonical payload: {0}")]
    Serialization(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ERWError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        ERWError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type for `Result<T, ERWError>`.
pub type ERWResult<T> = Result<T, ERWError>;
