// src/processing/classify.rs
//! Threshold classification of index and band grids into boolean masks.
//!
//! All predicates use plain float comparisons, so an undefined (NaN)
//! operand always yields `false`.

use tracing::warn;

use crate::grid::{BandGrid, IndexGrid, MaskGrid};

pub const VEGETATION_MIN_NDVI: f32 = 0.4;
pub const WATER_MIN_NDWI: f32 = 0.2;
pub const BUILT_UP_MIN_NDBI: f32 = 0.2;
pub const BUILT_UP_MAX_NDVI: f32 = 0.2;
pub const HOTSPOT_MIN_RED: f32 = 0.6;
pub const HOTSPOT_MAX_NIR: f32 = 0.25;

/// The four land-cover masks of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Masks {
    pub vegetation: MaskGrid,
    pub water: MaskGrid,
    pub built_up: MaskGrid,
    pub hotspot: MaskGrid,
}

impl Masks {
    pub fn classify(
        ndvi: &IndexGrid,
        ndwi: &IndexGrid,
        ndbi: &IndexGrid,
        red: &BandGrid,
        nir: &BandGrid,
    ) -> Self {
        Self {
            vegetation: vegetation_mask(ndvi),
            water: water_mask(ndwi),
            built_up: built_up_mask(ndbi, ndvi),
            hotspot: hotspot_mask(red, nir),
        }
    }
}

/// NDVI > 0.4
pub fn vegetation_mask(ndvi: &IndexGrid) -> MaskGrid {
    ndvi.map(|&v| v > VEGETATION_MIN_NDVI)
}

/// NDWI > 0.2
pub fn water_mask(ndwi: &IndexGrid) -> MaskGrid {
    ndwi.map(|&v| v > WATER_MIN_NDWI)
}

/// NDBI > 0.2 and NDVI < 0.2
pub fn built_up_mask(ndbi: &IndexGrid, ndvi: &IndexGrid) -> MaskGrid {
    ndbi.zip_map(ndvi, |&b, &v| b > BUILT_UP_MIN_NDBI && v < BUILT_UP_MAX_NDVI)
}

/// Bright-red, dark-NIR pixels (thermal or bare-soil hotspots).
///
/// Two passes: each band is first scaled by its own finite maximum, then
/// `red > 0.6 && nir < 0.25` is tested per pixel.
pub fn hotspot_mask(red: &BandGrid, nir: &BandGrid) -> MaskGrid {
    let red_norm = normalize_by_max(red);
    let nir_norm = normalize_by_max(nir);
    red_norm.zip_map(&nir_norm, |&r, &n| r > HOTSPOT_MIN_RED && n < HOTSPOT_MAX_NIR)
}

/// Divide every cell by the grid's finite maximum.
///
/// If there is no finite cell, or the maximum is exactly zero, the
/// normalization is degenerate and every cell becomes NaN.
pub fn normalize_by_max(band: &BandGrid) -> BandGrid {
    match band.finite_max() {
        Some(max) if max != 0.0 => band.map(|&v| v / max),
        max => {
            warn!(?max, "degenerate band maximum, normalized band is undefined");
            band.map(|_| f32::NAN)
        }
    }
}
