//! Application-level errors.

use letter_pool::PoolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The vocabulary or pad budget cannot produce a pool.
    #[error("configuration error: {0}")]
    Config(#[from] PoolError),

    /// The visualizer window could not be created.
    #[error("window error: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
