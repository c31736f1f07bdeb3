use crate::dialect::Dialect;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortarError {
    /// Mutually exclusive options were requested together
    #[error("Configuration conflict: {0}")]
    ConfigurationConflict(String),

    /// An enum type was requested without a usable value list
    #[error("Invalid enum type: {0}")]
    InvalidTypeDescriptor(String),

    /// The selected dialect does not implement this operation
    #[error("{operation} is not supported by the {dialect} dialect")]
    Unsupported {
        dialect: Dialect,
        operation: &'static str,
    },
}

/// Result type for statement generation
pub type Result<T> = std::result::Result<T, MortarError>;
