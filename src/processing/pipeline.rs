// src/processing/pipeline.rs
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::grid::{BandGrid, IndexGrid};
use crate::io::{Band, BandSource};
use crate::processing::classify::Masks;
use crate::processing::indices::SpectralIndex;

/// The five band grids of a tile.
#[derive(Debug, Clone)]
pub struct Bands {
    pub red: BandGrid,
    pub green: BandGrid,
    pub blue: BandGrid,
    pub nir: BandGrid,
    pub swir: BandGrid,
}

impl Bands {
    pub fn get(&self, band: Band) -> &BandGrid {
        match band {
            Band::Red => &self.red,
            Band::Green => &self.green,
            Band::Blue => &self.blue,
            Band::Nir => &self.nir,
            Band::Swir => &self.swir,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.red.shape()
    }
}

#[derive(Debug, Clone)]
pub struct Indices {
    pub ndvi: IndexGrid,
    pub ndwi: IndexGrid,
    pub ndbi: IndexGrid,
}

impl Indices {
    pub fn compute(bands: &Bands) -> Self {
        let run = |index: SpectralIndex| {
            let (a, b) = index.bands();
            let grid = index.compute(bands.get(a), bands.get(b));
            debug!(index = index.name(), "index computed");
            grid
        };

        Self {
            ndvi: run(SpectralIndex::Vegetation),
            ndwi: run(SpectralIndex::Water),
            ndbi: run(SpectralIndex::BuiltUp),
        }
    }

    pub fn get(&self, index: SpectralIndex) -> &IndexGrid {
        match index {
            SpectralIndex::Vegetation => &self.ndvi,
            SpectralIndex::Water => &self.ndwi,
            SpectralIndex::BuiltUp => &self.ndbi,
        }
    }
}

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub bands: Bands,
    pub indices: Indices,
    pub masks: Masks,
}

/// Fetch all bands, then compute indices and masks.
///
/// The first band that cannot be fetched aborts the run; nothing is
/// computed from a partial set of bands.
pub fn run_analysis(source: &dyn BandSource) -> Result<AnalysisOutput, AnalysisError> {
    let bands = fetch_bands(source)?;
    let shape = bands.shape();
    info!(width = shape.0, height = shape.1, "bands fetched");

    let indices = Indices::compute(&bands);
    let masks = Masks::classify(
        &indices.ndvi,
        &indices.ndwi,
        &indices.ndbi,
        &bands.red,
        &bands.nir,
    );

    info!(
        vegetation = masks.vegetation.count_true(),
        water = masks.water.count_true(),
        built_up = masks.built_up.count_true(),
        hotspot = masks.hotspot.count_true(),
        "masks classified"
    );

    Ok(AnalysisOutput {
        bands,
        indices,
        masks,
    })
}

fn fetch_bands(source: &dyn BandSource) -> Result<Bands, AnalysisError> {
    let red = source.fetch(Band::Red)?;
    let green = source.fetch(Band::Green)?;
    let blue = source.fetch(Band::Blue)?;
    let nir = source.fetch(Band::Nir)?;
    let swir = source.fetch(Band::Swir)?;

    let expected = red.shape();
    for (band, grid) in [
        (Band::Green, &green),
        (Band::Blue, &blue),
        (Band::Nir, &nir),
        (Band::Swir, &swir),
    ] {
        if grid.shape() != expected {
            return Err(AnalysisError::ShapeMismatch {
                band,
                expected,
                found: grid.shape(),
            });
        }
    }

    Ok(Bands {
        red,
        green,
        blue,
        nir,
        swir,
    })
}
