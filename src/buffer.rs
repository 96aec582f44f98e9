//! Owned pixel grid used by all transforms.
//!
//! Buffers are stored as `(height, width, channels)` arrays of `u8` samples.
//! Channel count is 1 (grayscale), 3 (RGB), or 4 (RGBA) and is fixed for the
//! buffer's lifetime. A buffer is created by the codec, consumed by exactly
//! one transform, and re-encoded; it never outlives the call that made it.

use ndarray::{Array3, ArrayView3};

use crate::error::ProcessingError;

/// Decoded raster: width, height, channel count, and row-major samples.
///
/// Invariant: the backing array has shape `(height, width, channels)` with
/// `height >= 1`, `width >= 1`, and `channels` one of 1, 3, or 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    data: Array3<u8>,
}

impl ImageBuffer {
    /// Build a buffer from raw row-major samples.
    ///
    /// Fails with `InvalidArgument` when the dimensions are zero, the
    /// channel count is not 1, 3, or 4, or the sample length does not equal
    /// `width * height * channels`.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, ProcessingError> {
        if width == 0 || height == 0 {
            return Err(ProcessingError::InvalidArgument(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(ProcessingError::InvalidArgument(format!(
                "channel count must be 1, 3, or 4, got {channels}"
            )));
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(ProcessingError::InvalidArgument(format!(
                "sample length {} does not match {width}x{height}x{channels} = {expected}",
                data.len()
            )));
        }
        let data = Array3::from_shape_vec((height, width, channels), data)
            .expect("length checked against shape");
        Ok(Self { data })
    }

    /// Build a buffer from an already-shaped array.
    ///
    /// Fails with `InvalidArgument` under the same invariants as
    /// [`ImageBuffer::from_raw`].
    pub fn from_array(data: Array3<u8>) -> Result<Self, ProcessingError> {
        let (height, width, channels) = data.dim();
        if width == 0 || height == 0 {
            return Err(ProcessingError::InvalidArgument(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(ProcessingError::InvalidArgument(format!(
                "channel count must be 1, 3, or 4, got {channels}"
            )));
        }
        Ok(Self { data })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Samples per pixel (1, 3, or 4).
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// View of the pixel grid for the transforms.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Consume the buffer, returning the row-major samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }
}
