use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_TILE: &str = "https://sentinel-cogs.s3.us-west-2.amazonaws.com/sentinel-s2-l2a-cogs/18/S/UH/2021/4/S2B_18SUH_20210423_0_L2A";

#[derive(Parser)]
#[command(name = "spectral-scan")]
#[command(about = "Spectral index and land-cover mask analyzer for Sentinel-2 tiles")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output directory (batch: root directory for per-tile reports)
    #[arg(short, long, default_value = "output", global = true)]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one tile: NDVI, NDWI, NDBI and the four detection masks
    Analyze {
        /// Tile base path; band files B02/B03/B04/B08/B11.tif are appended
        #[arg(short, long, env = "SPECTRAL_SCAN_TILE", default_value = DEFAULT_TILE)]
        tile: String,
    },

    /// Analyze several tiles listed in a JSON configuration file
    Batch {
        /// Batch configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}
