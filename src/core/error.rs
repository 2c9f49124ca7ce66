use thiserror::Error;

/// Errors produced while parsing a NAVTEX dump
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavtexError {
    /// The input does not contain exactly one delimited message
    #[error("Invalid Navtex file: {0}")]
    InvalidFormat(String),
}

impl NavtexError {
    /// Human-readable reason without the error kind prefix
    pub fn reason(&self) -> &str {
        match self {
            NavtexError::InvalidFormat(reason) => reason,
        }
    }
}
