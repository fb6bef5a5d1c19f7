pub mod cli;
pub mod core;

pub use crate::core::config::SearchConfig;
pub use crate::core::search::PrimeSearch;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimehuntError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Worker failure: {0}")]
    Worker(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PrimehuntError>;
