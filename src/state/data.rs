/// Shared data structures for the editing session
///
/// These structs represent the data model that flows between
/// the pipeline and the UI layer. Pixel buffers sit behind an `Arc`
/// so a background writer can hold one without copying it.
use image::{ColorType, DynamicImage};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The decoded original picture
#[derive(Clone)]
pub struct SourceImage {
    pixels: Arc<DynamicImage>,
    /// File the image was decoded from
    path: PathBuf,
}

impl SourceImage {
    pub fn new(pixels: DynamicImage, path: impl Into<PathBuf>) -> Self {
        Self {
            pixels: Arc::new(pixels),
            path: path.into(),
        }
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn color(&self) -> ColorType {
        self.pixels.color()
    }
}

/// The sharpened derivative of a [`SourceImage`]
#[derive(Clone)]
pub struct EditedImage {
    pixels: Arc<DynamicImage>,
    /// Path of the source this was derived from
    source_path: PathBuf,
}

impl EditedImage {
    pub fn new(pixels: DynamicImage, source_path: impl Into<PathBuf>) -> Self {
        Self {
            pixels: Arc::new(pixels),
            source_path: source_path.into(),
        }
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn color(&self) -> ColorType {
        self.pixels.color()
    }
}

/// A source image together with the edit derived from it.
///
/// The pipeline only ever stores whole sessions, so an edited image
/// cannot exist without the source it came from.
#[derive(Clone)]
pub struct Session {
    pub source: SourceImage,
    pub edited: EditedImage,
}

// Pixel buffers are far too large for Debug output, print the shape only
impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("path", &self.path)
            .field("width", &self.width())
            .field("height", &self.height())
            .field("color", &self.color())
            .finish()
    }
}

impl fmt::Debug for EditedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditedImage")
            .field("source_path", &self.source_path)
            .field("width", &self.width())
            .field("height", &self.height())
            .field("color", &self.color())
            .finish()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("source", &self.source)
            .field("edited", &self.edited)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_shape_accessors() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 3));
        let source = SourceImage::new(img, "/photos/cat.jpg");

        assert_eq!(source.width(), 4);
        assert_eq!(source.height(), 3);
        assert_eq!(source.color(), ColorType::Rgb8);
        assert_eq!(source.path(), Path::new("/photos/cat.jpg"));
    }

    #[test]
    fn test_debug_omits_pixels() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(64, 64));
        let edited = EditedImage::new(img, "/photos/cat.jpg");

        let debug = format!("{:?}", edited);
        assert!(debug.contains("width: 64"));
        assert!(debug.len() < 200);
    }
}
