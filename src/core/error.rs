use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("Invalid nested field: {0}")]
    InvalidNestedField(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DialectError>;
