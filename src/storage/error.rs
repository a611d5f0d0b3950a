use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode data: {0}")]
    Encode(serde_json::Error),

    #[error("failed to decode data: {0}")]
    Decode(serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
