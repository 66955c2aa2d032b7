// src/lib.rs
pub mod batch;
pub mod cli;
pub mod error;
pub mod grid;
pub mod io;
pub mod processing;
pub mod render;
pub mod report;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
