// src/io/mod.rs
pub mod band;
pub mod reader;

pub use band::Band;
pub use reader::{BandSource, GdalBandSource, MemoryBandSource};
