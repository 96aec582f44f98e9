//! Gaussian blur filter.
//!
//! Separable two-pass convolution: one horizontal and one vertical 1D pass
//! per channel, O(w*h*k) instead of the O(w*h*k^2) of a full 2D kernel.
//! Out-of-bounds samples are clamped to the nearest edge pixel. Every
//! channel is convolved independently, alpha included. Rows are processed
//! in parallel; all state is local to the call.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;
use tracing::debug;

use super::core::gaussian_kernel_1d;
use crate::error::ProcessingError;

/// Apply Gaussian blur with the given standard deviation.
///
/// Fails with `InvalidParameter` when sigma is not a positive, finite
/// number.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `sigma` - Standard deviation of the Gaussian kernel
///
/// # Returns
/// Blurred image with the same dimensions and channel count
pub fn gaussian_blur(input: ArrayView3<u8>, sigma: f32) -> Result<Array3<u8>, ProcessingError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ProcessingError::InvalidParameter(format!(
            "sigma must be a positive finite number, got {sigma}"
        )));
    }

    let (height, width, channels) = input.dim();
    let kernel = gaussian_kernel_1d(sigma);
    let half = kernel.len() / 2;
    debug!(
        width,
        height,
        channels,
        kernel_len = kernel.len(),
        "Applying Gaussian blur"
    );

    // Pass 1: Horizontal, accumulating in f32 for precision
    let mut temp_flat = vec![0.0f32; height * width * channels];
    temp_flat
        .par_chunks_mut(width * channels)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                for c in 0..channels {
                    let mut sum = 0.0f32;
                    for (ki, &kv) in kernel.iter().enumerate() {
                        let sx = (x as isize + ki as isize - half as isize)
                            .clamp(0, width as isize - 1) as usize;
                        sum += input[[y, sx, c]] as f32 * kv;
                    }
                    row[x * channels + c] = sum;
                }
            }
        });

    let temp = Array3::from_shape_vec((height, width, channels), temp_flat)
        .expect("shape matches allocation");

    // Pass 2: Vertical, rounding back to u8
    let mut output_flat = vec![0u8; height * width * channels];
    output_flat
        .par_chunks_mut(width * channels)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                for c in 0..channels {
                    let mut sum = 0.0f32;
                    for (ki, &kv) in kernel.iter().enumerate() {
                        let sy = (y as isize + ki as isize - half as isize)
                            .clamp(0, height as isize - 1) as usize;
                        sum += temp[[sy, x, c]] * kv;
                    }
                    row[x * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
                }
            }
        });

    Ok(Array3::from_shape_vec((height, width, channels), output_flat)
        .expect("shape matches allocation"))
}
