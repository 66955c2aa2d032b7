// src/io/band.rs
use std::fmt;

/// Sentinel-2 L2A bands read for an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Red,
    Green,
    Blue,
    Nir,
    Swir,
}

impl Band {
    /// Fetch order of a run.
    pub const ALL: [Band; 5] = [Band::Red, Band::Green, Band::Blue, Band::Nir, Band::Swir];

    /// File name appended to the tile base path.
    pub fn suffix(&self) -> &'static str {
        match self {
            Band::Red => "B04.tif",
            Band::Green => "B03.tif",
            Band::Blue => "B02.tif",
            Band::Nir => "B08.tif",
            Band::Swir => "B11.tif", // 20 m
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Band::Red => "RED",
            Band::Green => "GREEN",
            Band::Blue => "BLUE",
            Band::Nir => "NIR",
            Band::Swir => "SWIR",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.suffix())
    }
}
