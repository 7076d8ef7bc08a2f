use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    #[error("Not initialized: {0}")]
    NotInitialized(String),

    #[error("Integrity check failed for chunk {0}")]
    Integrity(usize),

    #[error("Provider failure: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
