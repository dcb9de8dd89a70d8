use crate::core::utils::pbc::BoxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("pattern length {got} does not match beads per chain {expected}")]
    PatternLength { expected: usize, got: usize },

    #[error("{generated} beads generated; expected {declared}")]
    BeadCountMismatch { declared: usize, generated: usize },

    #[error(transparent)]
    Geometry(#[from] BoxError),
}
