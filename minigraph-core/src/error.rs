//! Error types for the minigraph core library.
//!
//! Defines the error enum exposed by the generator API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::edgelist::{EdgeListError, EdgeListErrorCode};

/// Error produced while configuring or running a [`crate::Generator`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Density must be a finite number.
    #[error("density must be finite (got {got})")]
    InvalidDensity {
        /// The non-finite density supplied by the caller.
        got: f64,
    },
    /// Writing the sampled edge list failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
}

/// Stable codes describing [`GeneratorError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GeneratorErrorCode {
    /// Density must be a finite number.
    InvalidDensity,
    /// Writing the sampled edge list failed.
    EdgeListFailure,
}

impl GeneratorErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDensity => "GENERATOR_INVALID_DENSITY",
            Self::EdgeListFailure => "GENERATOR_EDGE_LIST_FAILURE",
        }
    }
}

impl fmt::Display for GeneratorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GeneratorError {
    /// Retrieve the stable [`GeneratorErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> GeneratorErrorCode {
        match self {
            Self::InvalidDensity { .. } => GeneratorErrorCode::InvalidDensity,
            Self::EdgeList(_) => GeneratorErrorCode::EdgeListFailure,
        }
    }

    /// Retrieve the inner [`EdgeListErrorCode`] when the error originated in
    /// edge-list I/O.
    #[must_use]
    pub const fn edge_list_code(&self) -> Option<EdgeListErrorCode> {
        match self {
            Self::EdgeList(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
