use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpVersionError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Unknown version bump kind: {0}")]
    InvalidBumpKind(String),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpVersionError>;

impl BumpVersionError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumpVersionError::Parse(msg.into())
    }

    /// Create an invalid bump kind error with context
    pub fn invalid_kind(msg: impl Into<String>) -> Self {
        BumpVersionError::InvalidBumpKind(msg.into())
    }
}
