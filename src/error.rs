use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("aggregate is empty")]
    EmptyAggregate,
    #[error("date {date:?} must be exactly 8 bytes, got {len}")]
    InvalidDate { date: String, len: usize },
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
