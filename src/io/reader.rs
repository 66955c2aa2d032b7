// src/io/reader.rs
use std::collections::{HashMap, HashSet};

use gdal::Dataset;
use tracing::{debug, info};

use super::band::Band;
use crate::error::SourceUnavailable;
use crate::grid::BandGrid;

/// Supplies full-resolution band grids for one tile.
pub trait BandSource: Send + Sync {
    fn fetch(&self, band: Band) -> Result<BandGrid, SourceUnavailable>;
}

/// Reads bands of a Cloud Optimized GeoTIFF tile through GDAL.
///
/// The tile is addressed by a base path; each band lives at
/// `{base}/{suffix}`. HTTP(S) bases go through `/vsicurl/`.
pub struct GdalBandSource {
    base: String,
}

impl GdalBandSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// GDAL path of a band file.
    pub fn band_path(&self, band: Band) -> String {
        let location = format!("{}/{}", self.base, band.suffix());
        if location.starts_with("http://") || location.starts_with("https://") {
            format!("/vsicurl/{location}")
        } else {
            location
        }
    }
}

impl BandSource for GdalBandSource {
    fn fetch(&self, band: Band) -> Result<BandGrid, SourceUnavailable> {
        let path = self.band_path(band);
        debug!(%band, %path, "opening band");

        let unavailable = |e: gdal::errors::GdalError| SourceUnavailable::new(band, path.clone(), e);

        let dataset = Dataset::open(&path).map_err(unavailable)?;
        let (width, height) = dataset.raster_size();
        let raster = dataset.rasterband(1).map_err(unavailable)?;
        let buffer = raster
            .read_as::<f32>((0, 0), (width, height), (width, height), None)
            .map_err(unavailable)?;

        info!(%band, width, height, "band read");
        Ok(BandGrid::new((width, height), buffer.data().to_vec()))
    }
}

/// Band source backed by grids already in memory.
#[derive(Default)]
pub struct MemoryBandSource {
    bands: HashMap<Band, BandGrid>,
    failing: HashSet<Band>,
}

impl MemoryBandSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_band(mut self, band: Band, grid: BandGrid) -> Self {
        self.bands.insert(band, grid);
        self
    }

    /// Make `fetch` fail for `band` even if a grid is present.
    pub fn failing(mut self, band: Band) -> Self {
        self.failing.insert(band);
        self
    }
}

impl BandSource for MemoryBandSource {
    fn fetch(&self, band: Band) -> Result<BandGrid, SourceUnavailable> {
        if self.failing.contains(&band) {
            return Err(SourceUnavailable::new(band, "memory", "band marked as failing"));
        }
        self.bands
            .get(&band)
            .cloned()
            .ok_or_else(|| SourceUnavailable::new(band, "memory", "band not loaded"))
    }
}
