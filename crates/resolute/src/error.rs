//! Error types

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResoluteError {
    #[error("Parse error in `{input}`: {message}")]
    Parse { input: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid problem file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ResoluteError {
    pub(crate) fn parse(input: &str, message: impl Into<String>) -> Self {
        ResoluteError::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResoluteError>;
