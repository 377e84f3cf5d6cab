use thiserror::Error;

pub type CpilensResult<T> = std::result::Result<T, CpilensError>;

/// Errors cpilens can have
#[derive(Debug, Error)]
pub enum CpilensError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Delimiter should not be empty")]
    DelimiterEmpty,

    #[error("Delimiter should be within the ASCII range: {0} is too fancy")]
    DelimiterNotAscii(char),

    #[error("Delimiter should be exactly one character (or \\t), got '{0}'")]
    DelimiterMultipleCharacters(String),

    #[error(transparent)]
    DelimiterParsing(#[from] std::char::TryFromCharError),

    #[error("Number of records to show should be positive, got {0}")]
    TopNotPositive(usize),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
