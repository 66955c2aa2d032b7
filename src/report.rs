// src/report.rs
//! Writes the result of a run as seven PNG panels, an HTML page laying
//! them out, and a JSON summary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::grid::{Grid, IndexGrid, MaskGrid};
use crate::io::GdalBandSource;
use crate::processing::indices::SpectralIndex;
use crate::processing::{run_analysis, AnalysisOutput};
use crate::render::{ColorMap, PngRenderer, Renderer};

/// One rendered image of the dashboard.
pub struct Panel {
    pub name: &'static str,
    pub title: &'static str,
    pub colormap: ColorMap,
    pub range: Option<(f32, f32)>,
}

pub static INDEX_PANELS: [Panel; 3] = [
    Panel { name: "ndvi", title: "Vegetation (NDVI)", colormap: ColorMap::RdYlGn, range: Some((-1.0, 1.0)) },
    Panel { name: "ndwi", title: "Water (NDWI)", colormap: ColorMap::Blues, range: Some((-1.0, 1.0)) },
    Panel { name: "ndbi", title: "Built-up (NDBI)", colormap: ColorMap::Oranges, range: Some((-1.0, 1.0)) },
];

pub static MASK_PANELS: [Panel; 4] = [
    Panel { name: "vegetation", title: "Vegetation", colormap: ColorMap::Gray, range: None },
    Panel { name: "water", title: "Water", colormap: ColorMap::Gray, range: None },
    Panel { name: "built_up", title: "Built-up", colormap: ColorMap::Gray, range: None },
    Panel { name: "hotspot", title: "Hotspots", colormap: ColorMap::Hot, range: None },
];

#[derive(Debug, Serialize, PartialEq)]
pub struct IndexSummary {
    pub name: String,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub mean: Option<f64>,
    pub undefined: usize,
}

impl IndexSummary {
    pub fn from_grid(name: &str, grid: &IndexGrid) -> Self {
        let (sum, count) = grid
            .data()
            .iter()
            .filter(|v| v.is_finite())
            .fold((0.0f64, 0usize), |(s, n), &v| (s + v as f64, n + 1));

        Self {
            name: name.to_string(),
            min: grid.finite_min(),
            max: grid.finite_max(),
            mean: (count > 0).then(|| sum / count as f64),
            undefined: grid.data().iter().filter(|v| v.is_nan()).count(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MaskSummary {
    pub name: String,
    pub pixels: usize,
    pub fraction: f64,
}

impl MaskSummary {
    pub fn from_grid(name: &str, grid: &MaskGrid) -> Self {
        let pixels = grid.count_true();
        Self {
            name: name.to_string(),
            pixels,
            fraction: if grid.is_empty() {
                0.0
            } else {
                pixels as f64 / grid.len() as f64
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub tile: String,
    pub width: usize,
    pub height: usize,
    pub indices: Vec<IndexSummary>,
    pub masks: Vec<MaskSummary>,
}

impl Summary {
    pub fn new(tile: &str, output: &AnalysisOutput) -> Self {
        let (width, height) = output.bands.shape();
        let masks = &output.masks;
        Self {
            tile: tile.to_string(),
            width,
            height,
            indices: SpectralIndex::ALL
                .iter()
                .map(|index| IndexSummary::from_grid(index.name(), output.indices.get(*index)))
                .collect(),
            masks: vec![
                MaskSummary::from_grid("vegetation", &masks.vegetation),
                MaskSummary::from_grid("water", &masks.water),
                MaskSummary::from_grid("built_up", &masks.built_up),
                MaskSummary::from_grid("hotspot", &masks.hotspot),
            ],
        }
    }
}

/// Grids in panel order: the three indices, then the four masks as 0/255.
pub fn panel_grids(output: &AnalysisOutput) -> Vec<(&'static Panel, Grid<f32>)> {
    let masks = &output.masks;
    let mut grids: Vec<(&'static Panel, Grid<f32>)> = INDEX_PANELS
        .iter()
        .zip(SpectralIndex::ALL)
        .map(|(panel, index)| (panel, output.indices.get(index).clone()))
        .collect();
    for (panel, mask) in MASK_PANELS
        .iter()
        .zip([&masks.vegetation, &masks.water, &masks.built_up, &masks.hotspot])
    {
        grids.push((panel, mask.to_intensity()));
    }
    grids
}

/// Fetch a tile through GDAL, analyze it and write its report.
pub fn analyze_tile(tile: &str, out_dir: &Path) -> Result<Summary> {
    info!(tile, "running analysis");
    let source = GdalBandSource::new(tile);
    let output = run_analysis(&source)?;
    write_report(tile, &output, &PngRenderer, out_dir)
}

/// Render every panel and write the report into `out_dir`.
pub fn write_report(
    tile: &str,
    output: &AnalysisOutput,
    renderer: &dyn Renderer,
    out_dir: &Path,
) -> Result<Summary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    for (panel, grid) in panel_grids(output) {
        let (vmin, vmax) = match panel.range {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        };
        let png = renderer
            .render(&grid, panel.colormap, vmin, vmax)
            .with_context(|| format!("rendering panel {}", panel.name))?;
        let path = out_dir.join(format!("{}.png", panel.name));
        fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
        info!(panel = panel.name, path = %path.display(), "panel written");
    }

    let summary = Summary::new(tile, output);
    fs::write(
        out_dir.join("summary.json"),
        serde_json::to_string_pretty(&summary)?,
    )?;
    fs::write(out_dir.join("index.html"), dashboard_html(tile))?;

    Ok(summary)
}

fn figure_row(heading: &str, panels: &[Panel]) -> String {
    let figures: String = panels
        .iter()
        .map(|p| {
            format!(
                "      <figure><img src=\"{name}.png\" alt=\"{title}\"><figcaption>{title}</figcaption></figure>\n",
                name = p.name,
                title = p.title
            )
        })
        .collect();
    format!("  <h2>{heading}</h2>\n  <div class=\"row\">\n{figures}  </div>\n")
}

/// Static page showing the index row above the detection row.
pub fn dashboard_html(tile: &str) -> String {
    let tile = tile
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>Satellite Image Analyzer</title>\n  \
         <style>.row {{ display: flex; gap: 1em; }} figure {{ flex: 1; margin: 0; }} img {{ width: 100%; }}</style>\n\
         </head>\n<body>\n  <h1>Satellite Image Analyzer</h1>\n  <p>{tile}</p>\n{indices}{detections}</body>\n</html>\n",
        indices = figure_row("Indices", &INDEX_PANELS),
        detections = figure_row("Detections", &MASK_PANELS),
    )
}
