// src/batch.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::report::analyze_tile;

#[derive(Deserialize, Serialize, Debug)]
pub struct BatchConfig {
    #[serde(default)]
    pub global: GlobalParams,
    pub tiles: Vec<TileJob>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct GlobalParams {
    /// Root directory for per-tile reports; falls back to `--output`
    pub output_root: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TileJob {
    pub name: String,
    pub path: String,
    /// Overrides `<output_root>/<name>`
    pub output: Option<PathBuf>,
}

impl BatchConfig {
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)?;
        let config: BatchConfig = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    /// Output directory for one job.
    pub fn output_dir(&self, job: &TileJob, default_root: &Path) -> PathBuf {
        if let Some(output) = &job.output {
            return output.clone();
        }
        self.global
            .output_root
            .as_deref()
            .unwrap_or(default_root)
            .join(&job.name)
    }
}

/// Run every tile in turn. A failing tile does not stop the batch, but
/// makes the whole batch fail once all tiles were tried.
pub fn process_batch(config_path: &Path, default_root: &Path) -> Result<()> {
    let config = BatchConfig::from_file(config_path)?;
    let total = config.tiles.len();

    info!(tiles = total, "starting batch");

    let mut failed = Vec::new();
    for (i, job) in config.tiles.iter().enumerate() {
        let out_dir = config.output_dir(job, default_root);
        info!("[{}/{}] {} -> {}", i + 1, total, job.name, out_dir.display());

        if let Err(e) = analyze_tile(&job.path, &out_dir) {
            error!(tile = %job.name, "{e:#}");
            failed.push(job.name.clone());
        }
    }

    if !failed.is_empty() {
        return Err(anyhow::anyhow!(
            "{} of {} tiles failed: {}",
            failed.len(),
            total,
            failed.join(", ")
        ));
    }

    info!("batch complete");
    Ok(())
}
