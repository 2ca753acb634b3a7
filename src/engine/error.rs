use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both sides must be positive")]
    InvalidDimension { width: usize, height: usize },
    #[error("fill rate {0} is outside of [0, 1]")]
    InvalidProbability(f64),
}
