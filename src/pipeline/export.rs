/// PNG export of edited images
///
/// Saving is split in two: [`SaveJob`] captures what to write and where
/// (cheap, done on the UI thread), then [`SaveJob::run`] does the
/// blocking encode + write.
use image::{DynamicImage, ImageFormat};
use log::{error, info};
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{PipelineError, PipelineResult};
use crate::state::EditedImage;

/// A pending write of one edited image to one path
#[derive(Debug, Clone)]
pub struct SaveJob {
    pub image: EditedImage,
    pub target: PathBuf,
}

impl SaveJob {
    pub fn new(image: EditedImage, target: impl Into<PathBuf>) -> Self {
        Self {
            image,
            target: target.into(),
        }
    }

    /// Write the image as PNG, replacing any file already at the target
    pub fn run(self) -> PipelineResult<PathBuf> {
        write_png(self.image.pixels(), &self.target)?;
        Ok(self.target)
    }

    /// Run the write on the blocking pool
    pub async fn run_in_background(self) -> PipelineResult<PathBuf> {
        task::spawn_blocking(move || self.run()).await?
    }
}

/// Encode `image` as PNG at `path`
///
/// PNG has no float samples, so 32-bit float images are stored as
/// 16-bit integers (clamped to 0.0-1.0).
pub fn write_png(image: &DynamicImage, path: &Path) -> PipelineResult<()> {
    let result = match image {
        DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb16(image.to_rgb16()).save_with_format(path, ImageFormat::Png)
        }
        DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(image.to_rgba16()).save_with_format(path, ImageFormat::Png)
        }
        _ => image.save_with_format(path, ImageFormat::Png),
    };

    match result {
        Ok(()) => {
            info!("💾 Saved edited image: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("❌ Failed to save {}: {}", path.display(), e);
            Err(PipelineError::save(path, e))
        }
    }
}
