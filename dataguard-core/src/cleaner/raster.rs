//! Image metadata removal by decode and re-encode.
//!
//! Only pixel data survives the round trip; the encoders write no EXIF, XMP, ICC or text
//! chunks.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

use super::MediaKind;
use crate::errors::CleanError;

const JPEG_QUALITY: u8 = 95;

fn image_format(kind: MediaKind) -> Option<ImageFormat> {
    match kind {
        MediaKind::Jpeg => Some(ImageFormat::Jpeg),
        MediaKind::Png => Some(ImageFormat::Png),
        MediaKind::Gif => Some(ImageFormat::Gif),
        MediaKind::Bmp => Some(ImageFormat::Bmp),
        MediaKind::WebP => Some(ImageFormat::WebP),
        MediaKind::Pdf => None,
    }
}

/// Blends each pixel over an opaque white background.
fn composite_on_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let alpha = a as u16;
        let blend = |c: u8| ((c as u16 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Reduces any colour mode to 8-bit RGB or 8-bit grayscale.
fn flatten(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => img,
        other if other.color().has_alpha() => DynamicImage::ImageRgb8(composite_on_white(&other.to_rgba8())),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

pub(super) fn clean_image(bytes: &[u8], kind: MediaKind) -> Result<Vec<u8>, CleanError> {
    let format = image_format(kind).ok_or_else(|| CleanError::UnsupportedKind(kind.to_string()))?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CleanError::malformed(kind.to_string(), e))?;
    // The WebP encoder only takes RGB(A).
    let flattened = match (kind, flatten(decoded)) {
        (MediaKind::WebP, gray @ DynamicImage::ImageLuma8(_)) => DynamicImage::ImageRgb8(gray.to_rgb8()),
        (_, img) => img,
    };

    let mut out = Vec::new();
    let written = match kind {
        MediaKind::Jpeg => flattened.write_with_encoder(JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)),
        MediaKind::Png => flattened.write_with_encoder(PngEncoder::new_with_quality(
            &mut out,
            CompressionType::Best,
            FilterType::Adaptive,
        )),
        _ => flattened.write_to(&mut Cursor::new(&mut out), format),
    };
    written.map_err(|e| CleanError::malformed(kind.to_string(), e))?;

    Ok(out)
}
