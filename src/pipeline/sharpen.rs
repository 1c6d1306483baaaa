/// Fixed 3x3 sharpen filter
///
/// Kernel (divided by 16, no offset):
///
/// ```text
/// -2 -2 -2
/// -2 32 -2
/// -2 -2 -2
/// ```
///
/// Every channel is filtered in the image's native color mode, alpha
/// included. The outermost ring of pixels is copied unchanged, so
/// images smaller than 3x3 pass through untouched.
use image::{DynamicImage, ImageBuffer, Pixel};
use log::{debug, info};

use crate::error::{PipelineError, PipelineResult};
use crate::state::{EditedImage, SourceImage};

const KERNEL: [[f32; 3]; 3] = [
    [-2.0, -2.0, -2.0],
    [-2.0, 32.0, -2.0],
    [-2.0, -2.0, -2.0],
];

/// Sum of the kernel weights
const KERNEL_SCALE: f32 = 16.0;

/// Sharpen a source image into its edited counterpart
pub fn sharpen(source: &SourceImage) -> PipelineResult<EditedImage> {
    let pixels = sharpen_pixels(source.pixels())?;

    info!(
        "✨ Sharpened {}x{} {:?} image",
        pixels.width(),
        pixels.height(),
        pixels.color()
    );

    Ok(EditedImage::new(pixels, source.path()))
}

/// Apply the kernel to any supported color mode
pub fn sharpen_pixels(image: &DynamicImage) -> PipelineResult<DynamicImage> {
    let sharpened = match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(convolve(buf)?),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(convolve(buf)?),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(convolve(buf)?),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(convolve(buf)?),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(convolve(buf)?),
        DynamicImage::ImageLumaA16(buf) => DynamicImage::ImageLumaA16(convolve(buf)?),
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(convolve(buf)?),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(convolve(buf)?),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(convolve(buf)?),
        DynamicImage::ImageRgba32F(buf) => DynamicImage::ImageRgba32F(convolve(buf)?),
        other => {
            return Err(PipelineError::Filter {
                reason: format!("unsupported color mode {:?}", other.color()),
            })
        }
    };
    Ok(sharpened)
}

/// Channel sample the kernel can be evaluated on
trait Sample: Copy {
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;
}

impl Sample for u8 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(value: f32) -> Self {
        value.round().clamp(0.0, u8::MAX as f32) as u8
    }
}

impl Sample for u16 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(value: f32) -> Self {
        value.round().clamp(0.0, u16::MAX as f32) as u16
    }
}

impl Sample for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    // Float images are not range-limited
    fn from_f32(value: f32) -> Self {
        value
    }
}

fn convolve<P>(
    input: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> PipelineResult<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel,
    P::Subpixel: Sample,
{
    let (width, height) = input.dimensions();
    let channels = P::CHANNEL_COUNT as usize;
    let (w, h) = (width as usize, height as usize);
    let src: &[P::Subpixel] = input.as_raw();
    let mut out = src.to_vec();

    if w < 3 || h < 3 {
        debug!("Image {}x{} is smaller than the kernel, left as is", width, height);
    } else {
        let stride = w * channels;
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                for c in 0..channels {
                    let mut acc = 0.0f32;
                    for (ky, row) in KERNEL.iter().enumerate() {
                        let base = (y + ky - 1) * stride + c;
                        for (kx, weight) in row.iter().enumerate() {
                            acc += src[base + (x + kx - 1) * channels].to_f32() * weight;
                        }
                    }
                    out[y * stride + x * channels + c] =
                        <P::Subpixel as Sample>::from_f32(acc / KERNEL_SCALE);
                }
            }
        }
    }

    ImageBuffer::from_raw(width, height, out).ok_or_else(|| PipelineError::Filter {
        reason: format!("pixel buffer does not match {}x{}", width, height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, LumaA, Rgb, RgbImage, Rgba, Rgba32FImage, RgbaImage};

    fn checkerboard(size: u32) -> RgbImage {
        RgbImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([64, 96, 128])
            } else {
                Rgb([192, 160, 128])
            }
        })
    }

    #[test]
    fn test_preserves_shape_for_every_mode() {
        let images = vec![
            DynamicImage::ImageLuma8(GrayImage::new(6, 4)),
            DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(6, 4, LumaA([9u8, 255]))),
            DynamicImage::ImageRgb8(checkerboard(6)),
            DynamicImage::ImageRgba8(RgbaImage::new(6, 4)),
            DynamicImage::ImageLuma16(ImageBuffer::from_pixel(6, 4, Luma([1000u16]))),
            DynamicImage::ImageRgb16(ImageBuffer::from_pixel(6, 4, Rgb([1u16, 2, 3]))),
            DynamicImage::ImageRgba32F(Rgba32FImage::from_pixel(6, 4, Rgba([0.5, 0.5, 0.5, 1.0]))),
        ];

        for image in images {
            let sharpened = sharpen_pixels(&image).unwrap();
            assert_eq!(sharpened.width(), image.width());
            assert_eq!(sharpened.height(), image.height());
            assert_eq!(sharpened.color(), image.color());
        }
    }

    #[test]
    fn test_is_deterministic() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_fn(17, 11, |x, y| {
            Rgb([(x * 13 + y * 7) as u8, (x * y) as u8, (255 - x * 9) as u8])
        }));

        let first = sharpen_pixels(&image).unwrap();
        let second = sharpen_pixels(&image).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_uniform_image_unchanged() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 120, 240, 200])));
        let sharpened = sharpen_pixels(&image).unwrap();
        assert_eq!(sharpened.as_bytes(), image.as_bytes());
    }

    #[test]
    fn test_border_is_copied() {
        let input = checkerboard(10);
        let sharpened = convolve(&input).unwrap();

        for i in 0..10 {
            assert_eq!(sharpened.get_pixel(i, 0), input.get_pixel(i, 0));
            assert_eq!(sharpened.get_pixel(i, 9), input.get_pixel(i, 9));
            assert_eq!(sharpened.get_pixel(0, i), input.get_pixel(0, i));
            assert_eq!(sharpened.get_pixel(9, i), input.get_pixel(9, i));
        }
    }

    #[test]
    fn test_checkerboard_interior_values() {
        let sharpened = convolve(&checkerboard(10)).unwrap();

        // Dark cell: (32*64 - 2*(4*192 + 4*64)) / 16 = 0
        // Bright cell: (32*192 - 2*(4*64 + 4*192)) / 16 = 256, clamped to 255
        assert_eq!(sharpened.get_pixel(2, 2)[0], 0);
        assert_eq!(sharpened.get_pixel(3, 2)[0], 255);
        // Blue channel is flat across the board and stays put
        assert_eq!(sharpened.get_pixel(2, 2)[2], 128);
        assert_eq!(sharpened.get_pixel(3, 2)[2], 128);
    }

    #[test]
    fn test_single_edge_rounding() {
        // Center 100 with one neighbour at 0: (3200 - 2*700) / 16 = 112.5 → 113
        let mut input = GrayImage::from_pixel(3, 3, Luma([100]));
        input.put_pixel(0, 0, Luma([0]));

        let sharpened = convolve(&input).unwrap();
        assert_eq!(sharpened.get_pixel(1, 1)[0], 113);
    }

    #[test]
    fn test_tiny_images_pass_through() {
        for (w, h) in [(1, 1), (2, 5), (5, 2)] {
            let input = GrayImage::from_fn(w, h, |x, y| Luma([(x * 40 + y * 3) as u8]));
            let sharpened = convolve(&input).unwrap();
            assert_eq!(sharpened, input);
        }
    }

    #[test]
    fn test_sharpen_keeps_source_path() {
        let source = SourceImage::new(DynamicImage::ImageRgb8(checkerboard(4)), "/photos/board.bmp");
        let edited = sharpen(&source).unwrap();
        assert_eq!(edited.source_path(), source.path());
    }
}
