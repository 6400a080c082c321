use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
    #[error("random source failure")]
    RandomSource(#[from] rand::Error),
}
