use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write greeting: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
