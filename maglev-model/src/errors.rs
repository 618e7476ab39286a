//! Model construction errors.

use thiserror::Error;

#[derive(Error, Copy, Clone, PartialEq, Debug)]
pub enum EdgeError {
    #[error("Edge cost must not be negative, got {0}")]
    NegativeCost(f64),

    #[error("Edge cost must be a finite number, got {0}")]
    NonFiniteCost(f64),
}

pub type Result<T> = std::result::Result<T, EdgeError>;
