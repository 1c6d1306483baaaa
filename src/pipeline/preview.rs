/// On-screen previews
///
/// Converts any decoded image into a small RGBA8 buffer the UI can hand
/// straight to the renderer. Nothing is written to disk.
use image::{imageops::FilterType, DynamicImage};
use std::fmt;

/// RGBA8 pixels sized for display
#[derive(Clone, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

impl Preview {
    /// Fit `image` inside a `max_side` square, keeping the aspect ratio.
    /// Images already inside the bound keep their size.
    pub fn render(image: &DynamicImage, max_side: u32) -> Self {
        let max_side = max_side.max(1);
        let rgba = if image.width() > max_side || image.height() > max_side {
            image
                .resize(max_side, max_side, FilterType::Lanczos3)
                .to_rgba8()
        } else {
            image.to_rgba8()
        };

        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            rgba: rgba.into_raw(),
        }
    }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
