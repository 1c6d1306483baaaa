/// Image file loader
///
/// Decodes JPEG, PNG, BMP, TIFF and GIF files into a [`SourceImage`].
/// The format is sniffed from the file content; the extension only
/// matters when the content is not recognised.
use image::ImageReader;
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::task;

use super::preview::Preview;
use super::sharpen::sharpen;
use crate::error::{PipelineError, PipelineResult};
use crate::state::{Session, SourceImage};

/// Extensions offered by the file picker
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "gif"];

/// Load and decode an image file
///
/// # Returns
/// * `Ok(SourceImage)` - Decoded pixels in their native color mode
/// * `Err(PipelineError::Decode)` - File missing, unreadable or not an image
pub fn load(path: &Path) -> PipelineResult<SourceImage> {
    let pixels = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| PipelineError::decode(path, image::ImageError::IoError(e)))?
        .decode()
        .map_err(|e| {
            warn!("⚠️  Failed to decode {}: {}", path.display(), e);
            PipelineError::decode(path, e)
        })?;

    info!(
        "📷 Loaded {}: {}x{} {:?}",
        path.display(),
        pixels.width(),
        pixels.height(),
        pixels.color()
    );

    Ok(SourceImage::new(pixels, path))
}

/// Load a file and sharpen it, producing a complete session
pub fn open_session(path: &Path) -> PipelineResult<Session> {
    let source = load(path)?;
    let edited = sharpen(&source)?;
    Ok(Session { source, edited })
}

/// Result of a background open: the session plus its ready-to-draw previews
#[derive(Debug, Clone)]
pub struct Opened {
    pub session: Session,
    pub original_preview: Preview,
    pub edited_preview: Preview,
}

/// Open an image on the blocking pool so the UI stays responsive
pub async fn open_in_background(path: PathBuf, preview_side: u32) -> PipelineResult<Opened> {
    // Spawn blocking because decoding and convolution are CPU-bound
    task::spawn_blocking(move || -> PipelineResult<Opened> {
        let session = open_session(&path)?;
        let original_preview = Preview::render(session.source.pixels(), preview_side);
        let edited_preview = Preview::render(session.edited.pixels(), preview_side);
        Ok(Opened {
            session,
            original_preview,
            edited_preview,
        })
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(5, 7, Rgb([200, 10, 10])).save(&path).unwrap();

        let source = load(&path).unwrap();

        assert_eq!(source.width(), 5);
        assert_eq!(source.height(), 7);
        assert_eq!(source.color(), ColorType::Rgb8);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_load_keeps_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ghost.png");
        RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 128])).save(&path).unwrap();

        let source = load(&path).unwrap();
        assert_eq!(source.color(), ColorType::Rgba8);
    }

    #[test]
    fn test_load_sniffs_content_over_extension() {
        let dir = tempdir().unwrap();
        let png_path = dir.path().join("real.png");
        RgbImage::new(4, 4).save(&png_path).unwrap();

        // PNG bytes behind a .jpg name still decode
        let misnamed = dir.path().join("actually_png.jpg");
        fs::copy(&png_path, &misnamed).unwrap();

        let source = load(&misnamed).unwrap();
        assert_eq!(source.width(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/path.png"));
        assert!(matches!(result, Err(PipelineError::Decode { .. })));
    }

    #[test]
    fn test_load_text_renamed_as_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, "these are not pixels").unwrap();

        match load(&path) {
            Err(PipelineError::Decode { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_open_session_shapes_match() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        RgbImage::from_fn(9, 6, |x, y| Rgb([(x * 20) as u8, (y * 30) as u8, 90]))
            .save(&path)
            .unwrap();

        let session = open_session(&path).unwrap();

        assert_eq!(session.edited.width(), session.source.width());
        assert_eq!(session.edited.height(), session.source.height());
        assert_eq!(session.edited.color(), session.source.color());
        assert_eq!(session.edited.source_path(), path.as_path());
    }

    #[tokio::test]
    async fn test_open_in_background() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.png");
        RgbImage::from_pixel(400, 100, Rgb([50, 60, 70])).save(&path).unwrap();

        let opened = open_in_background(path, 200).await.unwrap();

        assert_eq!(opened.session.source.width(), 400);
        assert_eq!(opened.original_preview.width, 200);
        assert_eq!(opened.original_preview.height, 50);
        assert_eq!(opened.edited_preview.width, 200);
    }

    #[tokio::test]
    async fn test_open_in_background_reports_decode_error() {
        let result = open_in_background(PathBuf::from("/nonexistent/path.gif"), 200).await;
        assert!(matches!(result, Err(PipelineError::Decode { .. })));
    }
}
