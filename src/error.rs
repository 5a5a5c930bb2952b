use thiserror::Error;

/// Errors raised when conventions or rules are named as data
/// (configuration files, command line arguments).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown naming convention: {0}")]
    UnknownConvention(String),

    #[error("unknown word rule: {0} (expected lower, upper, title or keep)")]
    UnknownRule(String),

    #[error("custom convention '{0}' has the same name as a built-in convention")]
    DuplicateConvention(String),
}

pub type Result<T> = std::result::Result<T, Error>;
