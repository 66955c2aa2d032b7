// src/processing/mod.rs
pub mod classify;
pub mod indices;
pub mod pipeline;

// Re-export main components
pub use classify::Masks;
pub use pipeline::{run_analysis, AnalysisOutput, Bands, Indices};
