use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid result limit: {0}")]
    InvalidLimit(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
