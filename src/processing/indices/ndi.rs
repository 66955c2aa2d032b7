// src/processing/indices/ndi.rs
use crate::grid::{BandGrid, IndexGrid};
use crate::processing::indices::IndexCalculator;
use rayon::prelude::*;

/// Normalized Difference Index (NDI) calculator: `(A - B) / (A + B)`
pub struct NDI {
    band_a_index: usize,
    band_b_index: usize,
    name: String,
}

impl NDI {
    pub fn new(band_a_index: usize, band_b_index: usize, name: Option<String>) -> Self {
        Self {
            band_a_index,
            band_b_index,
            name: name.unwrap_or_else(|| "NDI".to_string()),
        }
    }
}

impl IndexCalculator for NDI {
    fn calculate(&self, inputs: &[&BandGrid]) -> IndexGrid {
        normalized_difference(inputs[self.band_a_index], inputs[self.band_b_index])
    }

    fn required_bands(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Per-pixel `(a - b) / (a + b)`.
///
/// A pixel whose sum is exactly zero is NaN. The result is not clamped:
/// with negative inputs it can leave [-1, 1].
pub fn normalized_difference(band_a: &BandGrid, band_b: &BandGrid) -> IndexGrid {
    let shape = band_a.shape();
    assert_eq!(shape, band_b.shape(), "NDI inputs must share a shape");

    let a_data = band_a.data();
    let b_data = band_b.data();

    let mut result_data = vec![0.0f32; a_data.len()];

    result_data.par_iter_mut().enumerate().for_each(|(i, result)| {
        let a_val = a_data[i];
        let b_val = b_data[i];
        let sum = a_val + b_val;

        *result = if sum == 0.0 {
            f32::NAN
        } else {
            (a_val - b_val) / sum
        };
    });

    IndexGrid::new(shape, result_data)
}
