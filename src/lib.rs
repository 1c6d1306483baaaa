//! Photo Editor: pick a picture, sharpen it, save a PNG copy.
//!
//! The [`pipeline::ImagePipeline`] owns the editing session; the binary
//! wraps it in a small iced window.

pub mod error;
pub mod pipeline;
pub mod state;
pub mod ui;
