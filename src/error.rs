// src/error.rs
use thiserror::Error;

use crate::io::Band;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A band could not be fetched or decoded.
#[derive(Debug, Error)]
#[error("band {band} unavailable at {location}")]
pub struct SourceUnavailable {
    pub band: Band,
    pub location: String,
    #[source]
    pub cause: BoxError,
}

impl SourceUnavailable {
    pub fn new(band: Band, location: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            band,
            location: location.into(),
            cause: cause.into(),
        }
    }
}

/// Failure of a whole analysis run. No partial output accompanies it.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    SourceUnavailable(#[from] SourceUnavailable),

    #[error("band {band} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        band: Band,
        expected: (usize, usize),
        found: (usize, usize),
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render an empty grid")]
    EmptyGrid,

    #[error("grid of shape {0:?} exceeds image dimensions")]
    TooLarge((usize, usize)),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
