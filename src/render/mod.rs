// src/render/mod.rs
pub mod colormap;
pub mod png;

pub use colormap::{ColorMap, Rgb};
pub use png::PngRenderer;

use crate::error::RenderError;
use crate::grid::Grid;

/// Turns a numeric grid into encoded image bytes.
pub trait Renderer: Send + Sync {
    /// `vmin`/`vmax` fix the value range mapped onto the color map; a
    /// missing bound comes from the grid itself.
    fn render(
        &self,
        grid: &Grid<f32>,
        colormap: ColorMap,
        vmin: Option<f32>,
        vmax: Option<f32>,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Resolve the value range for a render call.
///
/// Missing bounds use the finite extremes of the grid. A degenerate
/// range (constant grid) is widened to `[v, v + 1]`, and a grid with no
/// finite cells falls back to `[0, 1]`.
pub fn value_range(grid: &Grid<f32>, vmin: Option<f32>, vmax: Option<f32>) -> (f32, f32) {
    let min = vmin.or_else(|| grid.finite_min());
    let max = vmax.or_else(|| grid.finite_max());

    match (min, max) {
        (Some(min), Some(max)) if max > min => (min, max),
        (Some(min), Some(_)) => (min, min + 1.0),
        _ => (0.0, 1.0),
    }
}

/// RGBA pixels for a grid, row-major. Non-finite cells are transparent.
pub fn grid_to_rgba(grid: &Grid<f32>, colormap: ColorMap, min: f32, max: f32) -> Vec<u8> {
    let inv_range = 1.0 / (max - min);
    let mut rgba = vec![0u8; grid.len() * 4];

    for (pixel, &v) in rgba.chunks_exact_mut(4).zip(grid.data()) {
        if !v.is_finite() {
            continue;
        }
        let Rgb { r, g, b } = colormap.evaluate((v - min) * inv_range);
        pixel.copy_from_slice(&[r, g, b, 255]);
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_range_is_kept() {
        let grid = Grid::new((2, 1), vec![0.3, 0.5]);
        assert_eq!(value_range(&grid, Some(-1.0), Some(1.0)), (-1.0, 1.0));
    }

    #[test]
    fn auto_range_from_data() {
        let grid = Grid::new((3, 1), vec![2.0, f32::NAN, 8.0]);
        assert_eq!(value_range(&grid, None, None), (2.0, 8.0));
        assert_eq!(value_range(&grid, Some(0.0), None), (0.0, 8.0));
    }

    #[test]
    fn degenerate_ranges() {
        let constant = Grid::new((2, 1), vec![0.0, 0.0]);
        assert_eq!(value_range(&constant, None, None), (0.0, 1.0));

        let undefined = Grid::new((1, 1), vec![f32::NAN]);
        assert_eq!(value_range(&undefined, None, None), (0.0, 1.0));
    }

    #[test]
    fn nan_cells_are_transparent() {
        let grid = Grid::new((2, 1), vec![f32::NAN, 1.0]);
        let rgba = grid_to_rgba(&grid, ColorMap::Gray, 0.0, 1.0);
        assert_eq!(rgba, vec![0, 0, 0, 0, 255, 255, 255, 255]);
    }
}
