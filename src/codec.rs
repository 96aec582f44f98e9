//! Compressed-container decode/encode adapter.
//!
//! Turns encoded image bytes (PNG, JPEG, and the other containers the
//! `image` crate recognizes) into an [`ImageBuffer`] and back. Decoded color
//! types are normalized to the engine's channel model: 8-bit luma stays
//! single-channel, RGB stays 3 channels, anything carrying alpha becomes
//! RGBA. PNG is the engine's lossless interchange format; encoding to PNG
//! and decoding again reproduces the buffer exactly.

use std::io::Cursor;

use image::{ColorType, DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use tracing::debug;

use crate::buffer::ImageBuffer;
use crate::error::ProcessingError;

/// Decode encoded image bytes into a pixel buffer.
///
/// Fails with `Decode` when the input is empty, truncated, or not a
/// recognized image container.
pub fn decode(bytes: &[u8]) -> Result<ImageBuffer, ProcessingError> {
    if bytes.is_empty() {
        return Err(ProcessingError::Decode("empty input".into()));
    }

    let img = image::load_from_memory(bytes)
        .map_err(|e| ProcessingError::Decode(e.to_string()))?;
    let width = img.width() as usize;
    let height = img.height() as usize;

    let (channels, data) = match img.color() {
        ColorType::L8 | ColorType::L16 => (1, img.into_luma8().into_raw()),
        c if c.has_alpha() => (4, img.into_rgba8().into_raw()),
        _ => (3, img.into_rgb8().into_raw()),
    };
    debug!(width, height, channels, "Decoded image");

    ImageBuffer::from_raw(width, height, channels, data)
}

/// Encode a pixel buffer into the target container format.
///
/// Fails with `Encode` when the buffer's channel count is unsupported by
/// the target format (JPEG cannot carry an alpha channel).
pub fn encode(buffer: ImageBuffer, format: ImageFormat) -> Result<Vec<u8>, ProcessingError> {
    let width = buffer.width() as u32;
    let height = buffer.height() as u32;
    let channels = buffer.channels();

    if format == ImageFormat::Jpeg && channels == 4 {
        return Err(ProcessingError::Encode(
            "JPEG does not support an alpha channel".into(),
        ));
    }

    let data = buffer.into_raw();
    let img = match channels {
        1 => DynamicImage::ImageLuma8(
            GrayImage::from_raw(width, height, data).expect("buffer length invariant"),
        ),
        3 => DynamicImage::ImageRgb8(
            RgbImage::from_raw(width, height, data).expect("buffer length invariant"),
        ),
        _ => DynamicImage::ImageRgba8(
            RgbaImage::from_raw(width, height, data).expect("buffer length invariant"),
        ),
    };

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), format)
        .map_err(|e| ProcessingError::Encode(e.to_string()))?;
    debug!(width, height, channels, ?format, "Encoded image");
    Ok(out)
}
