use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidAsset(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidAsset(msg) => {
                write!(f, "invalid asset: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Convenience alias for model-level results.
pub type Result<T> = std::result::Result<T, ModelError>;
