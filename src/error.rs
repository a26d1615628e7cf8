use thiserror::Error;

#[derive(Debug, Error)]
pub enum HumanizeError {
    #[error("input is empty or whitespace only")]
    EmptyInput,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HumanizeError>;
