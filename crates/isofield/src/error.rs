//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! The core is closed-form arithmetic over always-valid indices once the grid
//! dimension invariants hold, so the variant set is small: degenerate grid
//! dimensions and invalid simulation configuration.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions must be at least 2x2, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
