/// State management module
///
/// This module handles the editing session state, including:
/// - Source/edited image pairs (data.rs)
/// - Output location and preview settings (config.rs)

pub mod config;
pub mod data;

pub use config::{OutputNaming, PipelineConfig};
pub use data::{EditedImage, Session, SourceImage};
