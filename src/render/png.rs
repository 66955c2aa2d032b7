// src/render/png.rs
use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, RgbaImage};

use super::{grid_to_rgba, value_range, ColorMap, Renderer};
use crate::error::RenderError;
use crate::grid::Grid;

/// Renders grids to RGBA PNG, one image pixel per grid cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngRenderer;

impl Renderer for PngRenderer {
    fn render(
        &self,
        grid: &Grid<f32>,
        colormap: ColorMap,
        vmin: Option<f32>,
        vmax: Option<f32>,
    ) -> Result<Vec<u8>, RenderError> {
        if grid.is_empty() {
            return Err(RenderError::EmptyGrid);
        }
        let (width, height) = grid.shape();
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(RenderError::TooLarge(grid.shape())),
        };

        let (min, max) = value_range(grid, vmin, vmax);
        let rgba = grid_to_rgba(grid, colormap, min, max);
        let img = RgbaImage::from_raw(w, h, rgba).ok_or(RenderError::TooLarge(grid.shape()))?;

        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img).write_to(&mut cursor, ImageOutputFormat::Png)?;
        Ok(cursor.into_inner())
    }
}
