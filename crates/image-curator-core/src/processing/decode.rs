//! Decoding of candidate files into pixel buffers.
//!
//! The decoder sniffs the container from the file's leading bytes instead
//! of trusting the extension, so a PNG saved under a `.jpg` name still
//! decodes to its real pixels.
//!
//! The `image` crate converts some stored layouts on decode (CMYK JPEGs
//! come out as RGB, palette and sub-byte PNGs are expanded). The stored
//! layout is therefore read from the container header before decoding.

use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{DecodedImage, PixelMode};

/// Turns a path into a decoded image
pub trait Decoder {
    /// Decode the file at `path`
    ///
    /// Fails for unreadable or corrupt files and for pixel modes other than
    /// 8-bit RGB or 8-bit grayscale.
    fn decode(&self, path: &Path) -> Result<DecodedImage>;
}

/// Decoder backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let bytes = fs::read(path)?;
        let reader = ImageReader::new(Cursor::new(bytes.as_slice())).with_guessed_format()?;
        if let Some(format) = reader.format() {
            check_stored_layout(format, &bytes)?;
        }
        into_decoded(reader.decode()?)
    }
}

/// Reject stored layouts that decoding would silently convert
///
/// JPEG must be 8-bit RGB or 8-bit grayscale. PNG must be truecolour or
/// grayscale at 8 bits per sample. Other containers are left to
/// [`into_decoded`].
pub fn check_stored_layout(format: ImageFormat, bytes: &[u8]) -> Result<()> {
    match format {
        ImageFormat::Jpeg => {
            let mut decoder = jpeg_decoder::Decoder::new(bytes);
            decoder
                .read_info()
                .map_err(|e| Error::Header(format!("JPEG: {}", e)))?;
            match decoder.info().map(|info| info.pixel_format) {
                Some(jpeg_decoder::PixelFormat::RGB24) | Some(jpeg_decoder::PixelFormat::L8) => {
                    Ok(())
                }
                Some(other) => Err(Error::UnsupportedFormat(format!(
                    "JPEG pixel format {:?}",
                    other
                ))),
                None => Err(Error::Header("JPEG: missing frame header".to_string())),
            }
        }
        ImageFormat::Png => {
            let reader = png::Decoder::new(bytes)
                .read_info()
                .map_err(|e| Error::Header(format!("PNG: {}", e)))?;
            let info = reader.info();
            match (info.color_type, info.bit_depth) {
                (png::ColorType::Rgb, png::BitDepth::Eight)
                | (png::ColorType::Grayscale, png::BitDepth::Eight) => Ok(()),
                (color, depth) => Err(Error::UnsupportedFormat(format!(
                    "PNG {:?} at {:?} bits",
                    color, depth
                ))),
            }
        }
        _ => Ok(()),
    }
}

/// Convert an `image` crate buffer into a [`DecodedImage`]
pub fn into_decoded(img: DynamicImage) -> Result<DecodedImage> {
    let (width, height) = img.dimensions();
    match img {
        DynamicImage::ImageRgb8(buffer) => Ok(DecodedImage {
            mode: PixelMode::Color,
            width,
            height,
            pixels: buffer.into_raw(),
        }),
        DynamicImage::ImageLuma8(buffer) => Ok(DecodedImage {
            mode: PixelMode::Grayscale,
            width,
            height,
            pixels: buffer.into_raw(),
        }),
        other => Err(Error::UnsupportedFormat(format!(
            "pixel mode {:?}",
            other.color()
        ))),
    }
}
