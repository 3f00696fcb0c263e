use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeptideError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid parameter: {name} = {value}, {message}")]
    InvalidParameter {
        name: String,
        value: String,
        message: String,
    },

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Plotting error: {0}")]
    Plot(String),
}

/// Type alias for Result with PeptideError
pub type Result<T> = std::result::Result<T, PeptideError>;

impl PeptideError {
    /// Create a new InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PeptideError::InvalidInput(message.into())
    }

    /// Create a new InvalidParameter error
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        PeptideError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    /// Create a new Plot error
    pub fn plot(message: impl ToString) -> Self {
        PeptideError::Plot(message.to_string())
    }
}
