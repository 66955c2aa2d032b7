// src/processing/indices/mod.rs
pub mod ndi;

// Re-export indices
pub use ndi::{normalized_difference, NDI};

use crate::grid::{BandGrid, IndexGrid};
use crate::io::Band;

pub trait IndexCalculator: Send + Sync {
    /// Calculate the index from the provided input bands
    fn calculate(&self, inputs: &[&BandGrid]) -> IndexGrid;

    /// Return the number of required input bands
    fn required_bands(&self) -> usize;

    /// Return the name of the index
    fn name(&self) -> &str;
}

/// The normalized-difference indices computed for every tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralIndex {
    /// NDVI = (NIR - RED) / (NIR + RED)
    Vegetation,
    /// NDWI = (GREEN - NIR) / (GREEN + NIR)
    Water,
    /// NDBI = (SWIR - NIR) / (SWIR + NIR)
    BuiltUp,
}

impl SpectralIndex {
    pub const ALL: [SpectralIndex; 3] = [
        SpectralIndex::Vegetation,
        SpectralIndex::Water,
        SpectralIndex::BuiltUp,
    ];

    /// Bands in formula order: (positive term, negative term).
    pub fn bands(&self) -> (Band, Band) {
        match self {
            SpectralIndex::Vegetation => (Band::Nir, Band::Red),
            SpectralIndex::Water => (Band::Green, Band::Nir),
            SpectralIndex::BuiltUp => (Band::Swir, Band::Nir),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpectralIndex::Vegetation => "NDVI",
            SpectralIndex::Water => "NDWI",
            SpectralIndex::BuiltUp => "NDBI",
        }
    }

    /// Calculator expecting its inputs as `[a, b]` in formula order.
    pub fn calculator(&self) -> NDI {
        NDI::new(0, 1, Some(self.name().to_string()))
    }

    pub fn compute(&self, a: &BandGrid, b: &BandGrid) -> IndexGrid {
        self.calculator().calculate(&[a, b])
    }
}
